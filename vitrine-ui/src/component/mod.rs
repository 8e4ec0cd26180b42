pub mod button;
pub mod card;
pub mod form;
pub mod modal;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new().push(text::text(" ")))
        .style(theme::container::custom(crate::color::SLATE_200))
        .height(Length::Fixed(1.0))
        .width(Length::Fill)
}
