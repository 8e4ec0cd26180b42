use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};

pub fn primary<'a, T: 'a>(label: &'static str) -> Button<'a, T> {
    Button::new(text(label).font(MEDIUM))
        .padding([10, 20])
        .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(label: &'static str) -> Button<'a, T> {
    Button::new(text(label))
        .padding([10, 20])
        .style(theme::button::secondary)
}

pub fn transparent<'a, T: 'a>(label: &'static str) -> Button<'a, T> {
    Button::new(text(label))
        .padding([10, 20])
        .style(theme::button::transparent)
}
