use iced::widget::Space;
use iced::{Alignment, Length};
use serde_json::Value;
use tracing::{info, warn};

use vitrine_ui::{
    component::{button, card, separation, text},
    theme,
    widget::*,
};

use crate::contact::ContactPayload;

#[derive(Debug, Clone)]
pub enum Message {
    OpenForm,
}

/// Outcome of the last modal session, as the page displays it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Dismissed,
    Submitted(ContactPayload),
}

/// The demo page: a landing page with a few calls to action that request
/// the application-form dialog and display what it resolved with.
pub struct HomePage {
    outcome: Option<Outcome>,
}

impl HomePage {
    pub fn new() -> Self {
        Self { outcome: None }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn record_outcome(&mut self, value: Value) {
        if value.is_null() {
            info!("application form dismissed without a result");
            self.outcome = Some(Outcome::Dismissed);
            return;
        }
        match serde_json::from_value(value) {
            Ok(payload) => {
                self.outcome = Some(Outcome::Submitted(payload));
            }
            Err(e) => {
                warn!("unexpected application form outcome: {}", e);
                self.outcome = Some(Outcome::Dismissed);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let hero = Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .push(text::h1("A new standard for accessible dialogs"))
            .push(
                text::p1_regular(
                    "A design-system showcase: promise-based modal orchestration, \
                     focus trapping and a multi-step application form.",
                )
                .style(theme::text::secondary),
            )
            .push(button::primary("Open the application form").on_press(Message::OpenForm));

        let features = Row::new()
            .spacing(20)
            .push(feature(
                "Accessible by default",
                "The dialog names itself from its own title and description, \
                 moves focus to its container on open and announces field \
                 errors as they surface.",
            ))
            .push(feature(
                "Keyboard driven",
                "Escape closes, tab cycles through the dialog without ever \
                 leaving it, enter advances the form.",
            ))
            .push(feature(
                "One dialog at a time",
                "Any part of the page can request a dialog and await its \
                 outcome; a single session is rendered at any instant.",
            ));

        let shortcuts = Row::new()
            .spacing(20)
            .push(shortcut_card(
                "Dialog",
                &[
                    ("Close the dialog", "Esc"),
                    ("Next element", "Tab"),
                    ("Previous element", "Shift + Tab"),
                ],
            ))
            .push(shortcut_card(
                "Form",
                &[
                    ("Validate the step", "Enter"),
                    ("Activate a button", "Space"),
                ],
            ));

        let content = Column::new()
            .spacing(40)
            .padding(40)
            .max_width(900)
            .push(hero)
            .push_maybe(self.outcome_card())
            .push(text::h3("Highlights"))
            .push(features)
            .push(text::h3("Keyboard shortcuts"))
            .push(shortcuts)
            .push(separation())
            .push(
                text::caption("Vitrine, a design-system demo built with Rust and iced.")
                    .style(theme::text::secondary),
            );

        Container::new(content).center_x(Length::Fill).into()
    }

    fn outcome_card(&self) -> Option<Element<'_, Message>> {
        let outcome = self.outcome.as_ref()?;
        Some(match outcome {
            Outcome::Dismissed => card::simple(
                text::p2_regular("The last application form was dismissed without a result.")
                    .style(theme::text::secondary),
            )
            .width(Length::Fill)
            .into(),
            Outcome::Submitted(payload) => card::success(
                Column::new()
                    .spacing(8)
                    .push(text::p2_medium("Last submitted application"))
                    .push(text::p2_regular(format!(
                        "{} <{}>, {} of experience{}",
                        payload.name,
                        payload.email,
                        payload.experience,
                        match &payload.github_link {
                            Some(link) => format!(", {}", link),
                            None => String::new(),
                        }
                    ))),
            )
            .width(Length::Fill)
            .into(),
        })
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

fn feature<'a>(title: &'static str, body: &'static str) -> Element<'a, Message> {
    card::simple(
        Column::new()
            .spacing(10)
            .push(text::p1_medium(title))
            .push(text::p2_regular(body).style(theme::text::secondary)),
    )
    .width(Length::Fill)
    .into()
}

fn shortcut_card<'a>(
    title: &'static str,
    entries: &'a [(&'static str, &'static str)],
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(8).push(text::p1_medium(title));
    for (action, key) in entries {
        list = list.push(
            Row::new()
                .push(text::p2_regular(*action).style(theme::text::secondary))
                .push(Space::with_width(Length::Fill))
                .push(text::p2_medium(*key)),
        );
    }
    card::simple(list).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Experience;
    use serde_json::json;

    #[test]
    fn null_outcome_records_a_dismissal() {
        let mut page = HomePage::new();
        page.record_outcome(Value::Null);
        assert_eq!(page.outcome(), Some(&Outcome::Dismissed));
    }

    #[test]
    fn payload_outcome_records_the_submission() {
        let mut page = HomePage::new();
        page.record_outcome(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "experience": "4-7",
        }));
        assert_eq!(
            page.outcome(),
            Some(&Outcome::Submitted(ContactPayload {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                experience: Experience::FourToSeven,
                github_link: None,
            }))
        );
    }

    #[test]
    fn malformed_outcome_degrades_to_a_dismissal() {
        let mut page = HomePage::new();
        page.record_outcome(json!({"unexpected": true}));
        assert_eq!(page.outcome(), Some(&Outcome::Dismissed));
    }
}
