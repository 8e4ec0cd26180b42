use iced::widget::{center, container, mouse_area, opaque};
use iced::Length;

use vitrine_ui::{component::modal, theme, widget::*};

use super::{DialogLabels, Message};

/// The layer a dialog renders into, stacked over the whole window so its
/// placement is independent of wherever the session was requested from.
///
/// A press on the backdrop requests the close transition; the content card
/// is opaque so presses inside it never reach the backdrop.
pub fn dialog<'a>(
    labels: Option<&DialogLabels>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let card = Container::new(content)
        .id(container_id(labels))
        .max_width(modal::MODAL_WIDTH)
        .width(Length::Fill)
        .padding(25)
        .style(theme::card::modal);

    opaque(
        mouse_area(
            center(opaque(card))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::container::backdrop),
        )
        .on_press(Message::Close),
    )
}

// The container carries the ids of the elements naming it; there is no
// separate attribute channel for accessible names.
fn container_id(labels: Option<&DialogLabels>) -> container::Id {
    match labels {
        Some(labels) => container::Id::new(format!(
            "dialog:{}:{}",
            labels.title.as_str(),
            labels.description.as_str()
        )),
        None => container::Id::new("dialog"),
    }
}
