pub mod validate;
mod view;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use iced::Task;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use vitrine_ui::component::form;
use vitrine_ui::widget::Element;

use crate::modal::{self, DialogLabels, FocusTarget, ModalProps, ModalView};

use validate::{Field, FieldError, FieldValues};

/// How long the simulated submission takes.
const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// Lets a freshly rendered step mount before focus moves to its first field.
const STEP_FOCUS_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "0-3")]
    UpToThree,
    #[serde(rename = "4-7")]
    FourToSeven,
    #[serde(rename = "8+")]
    EightPlus,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::UpToThree,
        Experience::FourToSeven,
        Experience::EightPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpToThree => "0-3",
            Self::FourToSeven => "4-7",
            Self::EightPlus => "8+",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.as_str())
    }
}

/// What the wizard resolves the enclosing modal with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub experience: Experience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Identity,
    Experience,
    Link,
}

impl Step {
    pub const COUNT: usize = 3;

    pub fn index(&self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Experience => 2,
            Self::Link => 3,
        }
    }

    fn next(&self) -> Option<Step> {
        match self {
            Self::Identity => Some(Self::Experience),
            Self::Experience => Some(Self::Link),
            Self::Link => None,
        }
    }

    fn previous(&self) -> Option<Step> {
        match self {
            Self::Identity => None,
            Self::Experience => Some(Self::Identity),
            Self::Link => Some(Self::Experience),
        }
    }

    /// The subset of fields the advance action of this step validates.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::Identity => &[Field::Name, Field::Email],
            Self::Experience => &[Field::Experience],
            Self::Link => &[Field::GithubLink],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError(pub String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.0)
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone)]
pub enum Message {
    NameEdited(String),
    EmailEdited(String),
    ExperienceSelected(Experience),
    LinkEdited(String),
    /// The field lost focus at least once; its failures may be displayed
    /// from now on.
    Blurred(Field),
    /// Advance, or submit from the last step. Triggered by the next button
    /// and by enter in any field of the step.
    Next,
    Previous,
    Cancel,
    /// Confirm action of the completed screen: deliver the payload and
    /// close.
    Confirm,
    Submitted(Result<(), SubmitError>),
}

/// The application-form wizard: identity, experience, optional profile
/// link, then a completed screen. Validation runs on every change; failures
/// surface per field once the field has been touched.
pub struct ContactForm {
    step: Step,
    completed: bool,
    name: form::Value<String>,
    email: form::Value<String>,
    experience: Option<Experience>,
    link: form::Value<String>,
    touched: HashSet<Field>,
    errors: HashMap<Field, FieldError>,
    submitting: bool,
    warning: Option<SubmitError>,
    payload: Option<ContactPayload>,
    labels: DialogLabels,
}

impl ContactForm {
    pub fn new() -> Self {
        let mut form = Self {
            step: Step::Identity,
            completed: false,
            name: form::Value::default(),
            email: form::Value::default(),
            experience: None,
            link: form::Value::default(),
            touched: HashSet::new(),
            errors: HashMap::new(),
            submitting: false,
            warning: None,
            payload: None,
            labels: DialogLabels::generate(),
        };
        form.revalidate();
        form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn payload(&self) -> Option<&ContactPayload> {
        self.payload.as_ref()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// A failure is only surfaced once its field has been touched, even
    /// though validation runs continuously.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    fn values(&self) -> FieldValues<'_> {
        FieldValues {
            name: &self.name.value,
            email: &self.email.value,
            experience: self.experience,
            github_link: &self.link.value,
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate::evaluate(&self.values());
        self.name.valid = self.visible_error(Field::Name).is_none();
        self.email.valid = self.visible_error(Field::Email).is_none();
        self.link.valid = self.visible_error(Field::GithubLink).is_none();
    }

    fn step_blocked(&self) -> bool {
        self.step
            .fields()
            .iter()
            .any(|field| self.errors.contains_key(field))
    }

    fn payload_from_fields(&self) -> Option<ContactPayload> {
        if !self.errors.is_empty() {
            return None;
        }
        let link = self.link.value.trim();
        Some(ContactPayload {
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            experience: self.experience?,
            github_link: (!link.is_empty()).then(|| link.to_string()),
        })
    }

    fn advance(&mut self) -> Task<modal::Message> {
        if self.submitting || self.completed {
            return Task::none();
        }
        // Failures of untouched fields stay hidden; advancing is still
        // blocked on them.
        if self.step_blocked() {
            return Task::none();
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                deferred_focus()
            }
            None => self.submit(),
        }
    }

    fn submit(&mut self) -> Task<modal::Message> {
        let Some(payload) = self.payload_from_fields() else {
            return Task::none();
        };
        self.submitting = true;
        self.warning = None;
        info!("submitting application for {}", payload.name);
        Task::perform(
            // Stands in for the network call.
            async move {
                tokio::time::sleep(SUBMIT_DELAY).await;
                Ok(())
            },
            |result: Result<(), SubmitError>| modal::Message::Contact(Message::Submitted(result)),
        )
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalView for ContactForm {
    fn load_props(&mut self, props: &ModalProps) {
        // Callers may prefill the identity step.
        if let Some(name) = props.get("name").and_then(Value::as_str) {
            self.name.value = name.to_string();
        }
        if let Some(email) = props.get("email").and_then(Value::as_str) {
            self.email.value = email.to_string();
        }
        self.revalidate();
    }

    fn load(&self) -> Task<modal::Message> {
        let labels = self.labels.clone();
        Task::done(modal::Message::LabelsReady(labels))
            .chain(deferred_focus())
    }

    fn update(&mut self, message: modal::Message) -> Task<modal::Message> {
        let modal::Message::Contact(message) = message else {
            return Task::none();
        };
        match message {
            Message::NameEdited(name) => {
                if !self.submitting {
                    self.name.value = name;
                    self.revalidate();
                }
                Task::none()
            }
            Message::EmailEdited(email) => {
                if !self.submitting {
                    self.email.value = email;
                    self.revalidate();
                }
                Task::none()
            }
            Message::ExperienceSelected(experience) => {
                if !self.submitting {
                    self.experience = Some(experience);
                    self.touched.insert(Field::Experience);
                    self.revalidate();
                }
                Task::none()
            }
            Message::LinkEdited(link) => {
                if !self.submitting {
                    self.link.value = link;
                    self.revalidate();
                }
                Task::none()
            }
            Message::Blurred(field) => {
                self.touched.insert(field);
                self.revalidate();
                Task::none()
            }
            Message::Next => self.advance(),
            Message::Previous => {
                if self.submitting {
                    return Task::none();
                }
                match self.step.previous() {
                    Some(previous) => {
                        self.step = previous;
                        self.warning = None;
                        deferred_focus()
                    }
                    None => Task::none(),
                }
            }
            Message::Cancel => {
                if self.submitting {
                    return Task::none();
                }
                Task::done(modal::Message::Resolve(Value::Null))
                    .chain(Task::done(modal::Message::Close))
            }
            Message::Confirm => match &self.payload {
                Some(payload) => match serde_json::to_value(payload) {
                    Ok(value) => Task::done(modal::Message::Resolve(value))
                        .chain(Task::done(modal::Message::Close)),
                    Err(e) => {
                        error!("could not serialize the submitted payload: {}", e);
                        Task::none()
                    }
                },
                None => Task::none(),
            },
            Message::Submitted(Ok(())) => {
                self.submitting = false;
                match self.payload_from_fields() {
                    Some(payload) => {
                        info!("application submitted for {}", payload.name);
                        self.payload = Some(payload);
                        self.completed = true;
                    }
                    None => warn!("submission finished but the form is no longer valid"),
                }
                Task::none()
            }
            Message::Submitted(Err(e)) => {
                self.submitting = false;
                error!("{}", e);
                self.warning = Some(e);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, modal::Message> {
        if self.completed {
            view::completed(self).map(modal::Message::Contact)
        } else {
            view::wizard(self).map(modal::Message::Contact)
        }
    }

    fn focusables(&self) -> Vec<FocusTarget> {
        if self.completed || self.submitting {
            return Vec::new();
        }
        match self.step {
            Step::Identity => vec![
                FocusTarget::new(view::name_input_id())
                    .on_blur(modal::Message::Contact(Message::Blurred(Field::Name))),
                FocusTarget::new(view::email_input_id())
                    .on_blur(modal::Message::Contact(Message::Blurred(Field::Email))),
            ],
            // The experience selector is not a text field; there is nothing
            // for the ring to move through on this step.
            Step::Experience => Vec::new(),
            Step::Link => vec![FocusTarget::new(view::link_input_id())
                .on_blur(modal::Message::Contact(Message::Blurred(Field::GithubLink)))],
        }
    }
}

fn deferred_focus() -> Task<modal::Message> {
    Task::perform(
        async { tokio::time::sleep(STEP_FOCUS_DELAY).await },
        |_| modal::Message::FocusFirst,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(form: &mut ContactForm, message: Message) {
        let _task = form.update(modal::Message::Contact(message));
    }

    fn fill_identity(form: &mut ContactForm) {
        update(form, Message::NameEdited("Jane Doe".to_string()));
        update(form, Message::EmailEdited("jane@example.com".to_string()));
    }

    fn reach_link_step(form: &mut ContactForm) {
        fill_identity(form);
        update(form, Message::Next);
        update(form, Message::ExperienceSelected(Experience::FourToSeven));
        update(form, Message::Next);
        assert_eq!(form.step(), Step::Link);
    }

    #[test]
    fn starts_at_identity_with_failures_hidden() {
        let form = ContactForm::new();
        assert_eq!(form.step(), Step::Identity);
        // Validation already ran, but nothing has been touched.
        assert_eq!(form.error(Field::Name), Some(FieldError::NameTooShort));
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(form.visible_error(Field::Name), None);
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn short_name_blocks_and_surfaces_only_after_blur() {
        let mut form = ContactForm::new();
        update(&mut form, Message::NameEdited("a".to_string()));
        update(&mut form, Message::EmailEdited("jane@example.com".to_string()));
        update(&mut form, Message::Next);
        assert_eq!(form.step(), Step::Identity);
        assert_eq!(form.visible_error(Field::Name), None);

        update(&mut form, Message::Blurred(Field::Name));
        assert_eq!(form.visible_error(Field::Name), Some(FieldError::NameTooShort));
        update(&mut form, Message::Next);
        assert_eq!(form.step(), Step::Identity);
    }

    #[test]
    fn valid_identity_advances_to_experience() {
        let mut form = ContactForm::new();
        fill_identity(&mut form);
        update(&mut form, Message::Next);
        assert_eq!(form.step(), Step::Experience);
    }

    #[test]
    fn experience_is_required_to_advance() {
        let mut form = ContactForm::new();
        fill_identity(&mut form);
        update(&mut form, Message::Next);
        update(&mut form, Message::Next);
        assert_eq!(form.step(), Step::Experience);
        update(&mut form, Message::ExperienceSelected(Experience::UpToThree));
        update(&mut form, Message::Next);
        assert_eq!(form.step(), Step::Link);
    }

    #[test]
    fn backward_transitions_and_no_skip_from_the_first_step() {
        let mut form = ContactForm::new();
        fill_identity(&mut form);
        update(&mut form, Message::Next);
        update(&mut form, Message::Previous);
        assert_eq!(form.step(), Step::Identity);
        update(&mut form, Message::Previous);
        assert_eq!(form.step(), Step::Identity);
    }

    #[test]
    fn invalid_link_blocks_submission() {
        let mut form = ContactForm::new();
        reach_link_step(&mut form);
        update(&mut form, Message::LinkEdited("not-a-url".to_string()));
        update(&mut form, Message::Next);
        assert!(!form.is_submitting());
        assert_eq!(form.error(Field::GithubLink), Some(FieldError::LinkInvalid));

        update(
            &mut form,
            Message::LinkEdited("https://example.com/alice".to_string()),
        );
        update(&mut form, Message::Next);
        assert!(!form.is_submitting());
    }

    #[test]
    fn empty_or_github_link_submits() {
        let mut form = ContactForm::new();
        reach_link_step(&mut form);
        update(&mut form, Message::LinkEdited(String::new()));
        update(&mut form, Message::Next);
        assert!(form.is_submitting());

        let mut form = ContactForm::new();
        reach_link_step(&mut form);
        update(
            &mut form,
            Message::LinkEdited("https://github.com/alice".to_string()),
        );
        update(&mut form, Message::Next);
        assert!(form.is_submitting());
    }

    #[test]
    fn successful_submission_completes_with_the_payload() {
        let mut form = ContactForm::new();
        reach_link_step(&mut form);
        update(&mut form, Message::Next);
        assert!(form.is_submitting());
        // Edits are ignored while the submission is in flight.
        update(&mut form, Message::NameEdited("Someone Else".to_string()));

        update(&mut form, Message::Submitted(Ok(())));
        assert!(!form.is_submitting());
        assert!(form.is_completed());
        let payload = form.payload().unwrap();
        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.email, "jane@example.com");
        assert_eq!(payload.experience, Experience::FourToSeven);
        assert_eq!(payload.github_link, None);
    }

    #[test]
    fn failed_submission_recovers_on_the_link_step() {
        let mut form = ContactForm::new();
        reach_link_step(&mut form);
        update(&mut form, Message::Next);
        update(
            &mut form,
            Message::Submitted(Err(SubmitError("network unreachable".to_string()))),
        );
        assert!(!form.is_submitting());
        assert!(!form.is_completed());
        assert_eq!(form.step(), Step::Link);
        assert!(form.warning.is_some());
    }

    #[test]
    fn payload_serializes_with_camel_case_keys_and_no_empty_link() {
        let payload = ContactPayload {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            experience: Experience::FourToSeven,
            github_link: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "experience": "4-7",
            })
        );

        let payload = ContactPayload {
            github_link: Some("https://github.com/jane".to_string()),
            ..payload
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["githubLink"],
            json!("https://github.com/jane")
        );
    }

    #[test]
    fn props_prefill_the_identity_step() {
        let mut form = ContactForm::new();
        let mut props = ModalProps::new();
        props.insert("name".to_string(), json!("Jane Doe"));
        props.insert("email".to_string(), json!("jane@example.com"));
        form.load_props(&props);
        assert_eq!(form.name.value, "Jane Doe");
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn focusables_follow_the_current_step() {
        let mut form = ContactForm::new();
        assert_eq!(form.focusables().len(), 2);
        fill_identity(&mut form);
        update(&mut form, Message::Next);
        assert!(form.focusables().is_empty());
        update(&mut form, Message::ExperienceSelected(Experience::EightPlus));
        update(&mut form, Message::Next);
        assert_eq!(form.focusables().len(), 1);
        update(&mut form, Message::Next);
        // No trap targets while the submission is in flight.
        assert!(form.focusables().is_empty());
    }
}
