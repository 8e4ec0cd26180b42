use crate::{component::text, theme, widget::*};
use iced::Length;

/// A banner for an operation still in flight.
pub fn pending<'a, T: 'a>(message: &'static str) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding(15)
        .width(Length::Fill)
        .style(theme::notification::pending)
}

/// A banner for a failed operation the user can retry.
pub fn warning<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding(15)
        .width(Length::Fill)
        .style(theme::notification::error)
}
