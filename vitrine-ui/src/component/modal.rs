use iced::{
    alignment::Vertical,
    widget::{row, Space},
    Length,
};

use crate::{
    component::{button, text},
    theme,
    widget::{Element, Row, Text},
};

pub const MODAL_WIDTH: u16 = 550;
pub const SPACING: u16 = 10;

/// Top row of a dialog: optional back action, title, optional close action.
///
/// The title is taken as an element so callers can attach the identifier
/// that names the dialog to the container holding it.
pub fn header<'a, Message, Back, Close>(
    title: Option<Element<'a, Message>>,
    back_message: Option<Back>,
    close_message: Option<Close>,
) -> Element<'a, Message>
where
    Back: 'static + Fn() -> Message,
    Close: 'static + Fn() -> Message,
    Message: Clone + 'a,
{
    let back = back_message.map(|m| button::transparent("< Back").on_press(m()));
    let close = close_message.map(|m| button::transparent("Close").on_press(m()));
    Row::new()
        .push_maybe(back)
        .push_maybe(title)
        .push(Space::with_width(Length::Fill))
        .push_maybe(close)
        .spacing(SPACING)
        .align_y(Vertical::Center)
        .into()
}

/// Bottom row of a dialog: secondary actions on the left, main actions on
/// the right.
pub fn footer<'a, Message: 'a>(
    left: Option<Element<'a, Message>>,
    right: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut actions = Row::new().spacing(SPACING);
    if let Some(left) = left {
        actions = actions.push(left);
    }
    actions = actions.push(Space::with_width(Length::Fill)).push(right);
    actions.align_y(Vertical::Center).into()
}

/// Body text introducing a dialog, below its title.
pub fn description<'a>(content: &'static str) -> Text<'a> {
    text::p2_regular(content).style(theme::text::secondary)
}

/// A labelled row of the kind used by result summaries.
pub fn summary_line<'a, Message: 'a>(label: &'static str, value: String) -> Element<'a, Message> {
    row!(
        text::p2_medium(label),
        Space::with_width(Length::Fixed(10.0)),
        text::p2_regular(value).style(theme::text::secondary),
    )
    .align_y(Vertical::Center)
    .into()
}
