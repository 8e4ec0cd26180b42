use crate::{component::text::text, theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}

pub fn modal<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::modal)
}

pub fn invalid<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .style(theme::card::invalid)
}

pub fn success<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .style(theme::card::success)
}

/// display a warning card with the message.
pub fn warning<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text(message).style(theme::text::warning))
        .padding(15)
        .style(theme::card::warning)
}

/// display an error card with the message.
pub fn error<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text(message).style(theme::text::error))
        .padding(15)
        .style(theme::card::error)
}
