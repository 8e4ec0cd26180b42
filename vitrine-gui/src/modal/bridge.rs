use std::future::Future;

use serde_json::Value;
use tokio::sync::oneshot;

use super::{ModalProps, ModalStore, ModalView};

/// Requests a modal session and returns a future settling with the outcome
/// of the interaction: the value the view resolved with, or `Value::Null`
/// when the dialog was dismissed (escape, backdrop press, cancel).
///
/// The future never fails. When a second `open_modal` call replaces the
/// session, the store drops the superseded resolver without invoking it and
/// the orphaned future settles with `Value::Null` here instead of pending
/// forever.
///
/// Callers hand the future to `Task::perform` to receive the outcome as a
/// message once the session settles.
pub fn open_modal(
    store: &mut ModalStore,
    view: Option<Box<dyn ModalView>>,
    props: ModalProps,
) -> impl Future<Output = Value> + Send + 'static {
    let (resolver, settled) = oneshot::channel();
    store.open(view, props, resolver);
    async move { settled.await.unwrap_or(Value::Null) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::Message;
    use iced::Task;
    use serde_json::json;
    use vitrine_ui::{component::text, widget::Element};

    struct StubView;

    impl ModalView for StubView {
        fn update(&mut self, _message: Message) -> Task<Message> {
            Task::none()
        }

        fn view(&self) -> Element<'_, Message> {
            text::p1_regular("stub").into()
        }
    }

    #[tokio::test]
    async fn settles_with_the_view_result() {
        let mut store = ModalStore::new();
        let request = open_modal(&mut store, Some(Box::new(StubView)), ModalProps::new());
        store.resolve(json!({"name": "Jane"}));
        store.close();
        assert_eq!(request.await, json!({"name": "Jane"}));
    }

    #[tokio::test]
    async fn dismissal_settles_with_null() {
        let mut store = ModalStore::new();
        let request = open_modal(&mut store, Some(Box::new(StubView)), ModalProps::new());
        store.close();
        assert_eq!(request.await, Value::Null);
    }

    #[tokio::test]
    async fn replaced_session_settles_the_first_caller_with_null() {
        let mut store = ModalStore::new();
        let first = open_modal(&mut store, Some(Box::new(StubView)), ModalProps::new());
        let second = open_modal(&mut store, Some(Box::new(StubView)), ModalProps::new());
        // The first caller is not left pending forever.
        assert_eq!(first.await, Value::Null);
        store.resolve(json!("done"));
        store.close();
        assert_eq!(second.await, json!("done"));
    }
}
