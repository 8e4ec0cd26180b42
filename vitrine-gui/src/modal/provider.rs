use iced::Task;
use tracing::warn;

use vitrine_ui::widget::Element;

use super::{
    view, DialogLabels, FocusRing, Message, ModalStore, ScrollLock, ScrollState,
};

/// The single subscriber of the [`ModalStore`]: renders the active view
/// inside the dialog shell and owns the per-session chrome — the label ids
/// announced by the view, the focus ring and the scroll suspension.
pub struct ModalProvider {
    labels: Option<DialogLabels>,
    ring: FocusRing,
    scroll_lock: Option<ScrollLock>,
}

impl ModalProvider {
    pub fn new() -> Self {
        Self {
            labels: None,
            ring: FocusRing::new(),
            scroll_lock: None,
        }
    }

    /// Called right after the store opened a session: suspends page
    /// scrolling, hands the caller props to the view and runs its startup
    /// task. A session without a view renders nothing and mounts nothing.
    pub fn mount(&mut self, store: &mut ModalStore, scroll: &ScrollState) -> Task<Message> {
        self.labels = None;
        self.ring.reset();
        if !store.is_open() || store.view().is_none() {
            self.scroll_lock = None;
            if store.is_open() {
                warn!("modal session opened without a view; nothing to render");
            }
            return Task::none();
        }
        self.scroll_lock = Some(ScrollLock::engage(scroll));
        let props = store.props().clone();
        match store.view_mut() {
            Some(active) => {
                active.load_props(&props);
                active.load()
            }
            None => Task::none(),
        }
    }

    pub fn update(&mut self, store: &mut ModalStore, message: Message) -> Task<Message> {
        match message {
            Message::Close => {
                self.unmount();
                store.close();
                Task::none()
            }
            Message::Resolve(value) => {
                store.resolve(value);
                Task::none()
            }
            Message::LabelsReady(labels) => {
                self.labels = Some(labels);
                Task::none()
            }
            Message::FocusAdvance { reverse } => match store.view_mut() {
                Some(active) => {
                    let targets = active.focusables();
                    let (blurred, focus) = self.ring.advance(&targets, reverse);
                    let blur = match blurred {
                        Some(message) => active.update(message),
                        None => Task::none(),
                    };
                    Task::batch(vec![blur, focus])
                }
                None => Task::none(),
            },
            Message::FocusFirst => match store.view() {
                Some(active) => self.ring.focus_first(&active.focusables()),
                None => Task::none(),
            },
            message => match store.view_mut() {
                Some(active) => active.update(message),
                None => Task::none(),
            },
        }
    }

    /// Renders nothing while the session is closed or has no view.
    pub fn view<'a>(&'a self, store: &'a ModalStore) -> Option<Element<'a, Message>> {
        if !store.is_open() {
            return None;
        }
        let active = store.view()?;
        Some(view::dialog(self.labels.as_ref(), active.view()))
    }

    fn unmount(&mut self) {
        // Dropping the guard restores page scrolling.
        self.scroll_lock = None;
        self.labels = None;
        self.ring.reset();
    }

    #[cfg(test)]
    pub(crate) fn labels(&self) -> Option<&DialogLabels> {
        self.labels.as_ref()
    }
}

impl Default for ModalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{self, ContactForm};
    use crate::modal::{open_modal, ModalProps};
    use serde_json::{json, Value};

    fn wrap(message: contact::Message) -> Message {
        Message::Contact(message)
    }

    #[test]
    fn renders_nothing_while_closed() {
        let store = ModalStore::new();
        let provider = ModalProvider::new();
        assert!(provider.view(&store).is_none());
    }

    #[tokio::test]
    async fn session_without_a_view_renders_nothing_and_stays_pending() {
        let mut store = ModalStore::new();
        let scroll = ScrollState::new();
        let mut provider = ModalProvider::new();
        let request = open_modal(&mut store, None, ModalProps::new());
        provider.mount(&mut store, &scroll);
        assert!(provider.view(&store).is_none());
        assert!(!scroll.is_locked());
        // The request is silently dropped; only closing settles it.
        store.close();
        assert_eq!(request.await, Value::Null);
    }

    #[tokio::test]
    async fn escape_close_settles_the_caller_with_null() {
        let mut store = ModalStore::new();
        let scroll = ScrollState::new();
        let mut provider = ModalProvider::new();
        let request = open_modal(
            &mut store,
            Some(Box::new(ContactForm::new())),
            ModalProps::new(),
        );
        provider.mount(&mut store, &scroll);
        assert!(scroll.is_locked());
        assert!(provider.view(&store).is_some());

        provider.update(&mut store, Message::Close);
        assert!(!store.is_open());
        assert!(!scroll.is_locked());
        assert!(provider.view(&store).is_none());
        assert_eq!(request.await, Value::Null);
    }

    #[test]
    fn labels_announced_by_the_view_are_retained() {
        let mut store = ModalStore::new();
        let scroll = ScrollState::new();
        let mut provider = ModalProvider::new();
        let _request = open_modal(
            &mut store,
            Some(Box::new(ContactForm::new())),
            ModalProps::new(),
        );
        provider.mount(&mut store, &scroll);
        assert!(provider.labels().is_none());
        let labels = DialogLabels::generate();
        provider.update(&mut store, Message::LabelsReady(labels.clone()));
        assert_eq!(provider.labels(), Some(&labels));
    }

    #[tokio::test]
    async fn wizard_end_to_end_resolves_the_submitted_payload() {
        let mut store = ModalStore::new();
        let scroll = ScrollState::new();
        let mut provider = ModalProvider::new();
        let request = open_modal(
            &mut store,
            Some(Box::new(ContactForm::new())),
            ModalProps::new(),
        );
        provider.mount(&mut store, &scroll);

        for message in [
            contact::Message::NameEdited("Jane Doe".to_string()),
            contact::Message::EmailEdited("jane@example.com".to_string()),
            contact::Message::Next,
            contact::Message::ExperienceSelected(contact::Experience::FourToSeven),
            contact::Message::Next,
            // The link stays empty: the field is optional.
            contact::Message::Next,
            contact::Message::Submitted(Ok(())),
        ] {
            provider.update(&mut store, wrap(message));
        }

        // The confirm action of the completed view delivers the payload and
        // then requests close.
        let payload = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "experience": "4-7",
        });
        provider.update(&mut store, Message::Resolve(payload.clone()));
        provider.update(&mut store, Message::Close);

        assert_eq!(request.await, payload);
        assert!(!store.is_open());
        assert!(!scroll.is_locked());
    }
}
