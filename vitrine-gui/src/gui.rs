use iced::event::{self, Event};
use iced::widget::scrollable;
use iced::{keyboard, Length, Subscription, Task};
use serde_json::Value;
use tracing::info;

use vitrine_ui::{theme, widget::*};

use crate::contact::ContactForm;
use crate::home::{self, HomePage};
use crate::modal::{self, open_modal, ModalProps, ModalProvider, ModalStore, ScrollState};

pub struct App {
    store: ModalStore,
    provider: ModalProvider,
    home: HomePage,
    scroll: ScrollState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Modal(modal::Message),
    /// The promise returned by [`open_modal`] settled with this outcome.
    ModalSettled(Value),
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                store: ModalStore::new(),
                provider: ModalProvider::new(),
                home: HomePage::new(),
                scroll: ScrollState::new(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Vitrine".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(home::Message::OpenForm) => {
                info!("application form requested");
                let request = open_modal(
                    &mut self.store,
                    Some(Box::new(ContactForm::new())),
                    ModalProps::new(),
                );
                let mounted = self
                    .provider
                    .mount(&mut self.store, &self.scroll)
                    .map(Message::Modal);
                Task::batch(vec![
                    mounted,
                    Task::perform(request, Message::ModalSettled),
                ])
            }
            Message::Modal(message) => self
                .provider
                .update(&mut self.store, message)
                .map(Message::Modal),
            Message::ModalSettled(value) => {
                self.home.record_outcome(value);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = self.home.view().map(Message::Home);
        // The page behind an open dialog does not scroll.
        let content: Container<'_, Message> = if self.scroll.is_locked() {
            Container::new(page)
        } else {
            Container::new(scrollable(page))
        };
        let base: Element<'_, Message> = content
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::container::background)
            .into();

        match self.provider.view(&self.store) {
            Some(dialog) => Stack::with_children(vec![base, dialog.map(Message::Modal)])
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => base,
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // The global key listeners only exist while a dialog is up.
        if !self.store.is_open() {
            return Subscription::none();
        }
        event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }),
                _,
            ) => Some(Message::Modal(modal::Message::Close)),
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::Modal(modal::Message::FocusAdvance {
                reverse: modifiers.shift(),
            })),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_form_starts_a_session_and_suspends_scrolling() {
        let (mut app, _task) = App::new();
        assert!(!app.store.is_open());
        let _ = app.update(Message::Home(home::Message::OpenForm));
        assert!(app.store.is_open());
        assert!(app.scroll.is_locked());

        let _ = app.update(Message::Modal(modal::Message::Close));
        assert!(!app.store.is_open());
        assert!(!app.scroll.is_locked());
    }

    #[test]
    fn reopening_replaces_the_session() {
        let (mut app, _task) = App::new();
        let _ = app.update(Message::Home(home::Message::OpenForm));
        let _ = app.update(Message::Home(home::Message::OpenForm));
        assert!(app.store.is_open());
        // A single slot: the second session took it over, scrolling is
        // still suspended exactly once.
        assert!(app.scroll.is_locked());
        let _ = app.update(Message::Modal(modal::Message::Close));
        assert!(!app.scroll.is_locked());
    }

    #[test]
    fn settled_outcome_reaches_the_home_page() {
        let (mut app, _task) = App::new();
        let _ = app.update(Message::ModalSettled(Value::Null));
        assert_eq!(app.home.outcome(), Some(&home::Outcome::Dismissed));
    }
}
