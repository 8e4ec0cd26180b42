pub mod bridge;
pub mod focus;
pub mod provider;
pub mod scroll;
pub mod view;

pub use bridge::open_modal;
pub use focus::{FocusRing, FocusTarget, RingPosition};
pub use provider::ModalProvider;
pub use scroll::{ScrollLock, ScrollState};

use std::sync::atomic::{AtomicU64, Ordering};

use iced::Task;
use serde_json::Value;
use tokio::sync::oneshot;
use vitrine_ui::widget::Element;

use crate::contact;

/// Caller-supplied data handed to the view when it is mounted. Opaque to the
/// session.
pub type ModalProps = serde_json::Map<String, Value>;

#[derive(Debug, Clone)]
pub enum Message {
    /// Request the transition to closed (escape, backdrop press, an explicit
    /// cancel). The store decides what closed means.
    Close,
    /// Deliver the session outcome to the awaiting caller.
    Resolve(Value),
    /// The active view announced the ids naming its title and description.
    LabelsReady(DialogLabels),
    /// Move keyboard focus along the ring of focusable widgets.
    FocusAdvance { reverse: bool },
    /// Move keyboard focus to the first focusable widget of the view.
    FocusFirst,
    Contact(contact::Message),
}

/// A renderable dialog body. The session never inspects its internals; it
/// only mounts it, routes messages to it and renders it inside the shell.
///
/// Views deliver a result by emitting [`Message::Resolve`] before
/// [`Message::Close`].
pub trait ModalView {
    /// Receives the props the caller supplied to [`open_modal`].
    fn load_props(&mut self, _props: &ModalProps) {}

    /// Startup task, run when the provider mounts the view. Views use it to
    /// announce their label ids.
    fn load(&self) -> Task<Message> {
        Task::none()
    }

    fn update(&mut self, message: Message) -> Task<Message>;

    fn view(&self) -> Element<'_, Message>;

    /// The focusable widgets of the view, in document order. Queried fresh
    /// on every focus move; never cached.
    fn focusables(&self) -> Vec<FocusTarget> {
        Vec::new()
    }
}

/// Identifier of a labelling element, generated by the view next to the
/// markup that renders it and attached by the provider to the dialog
/// container they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelId(String);

impl LabelId {
    /// Unique for the lifetime of the process.
    pub fn generate(prefix: &str) -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn container_id(&self) -> iced::widget::container::Id {
        iced::widget::container::Id::new(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    pub title: LabelId,
    pub description: LabelId,
}

impl DialogLabels {
    pub fn generate() -> Self {
        Self {
            title: LabelId::generate("dialog-title"),
            description: LabelId::generate("dialog-description"),
        }
    }
}

struct ModalSession {
    is_open: bool,
    view: Option<Box<dyn ModalView>>,
    props: ModalProps,
    resolver: Option<oneshot::Sender<Value>>,
}

impl ModalSession {
    fn closed() -> Self {
        Self {
            is_open: false,
            view: None,
            props: ModalProps::new(),
            resolver: None,
        }
    }
}

/// The single slot holding the active modal session. Constructed once at
/// application start and passed by reference wherever a dialog can be
/// requested; all mutation goes through [`open`](Self::open),
/// [`resolve`](Self::resolve) and [`close`](Self::close).
pub struct ModalStore {
    session: ModalSession,
}

impl ModalStore {
    pub fn new() -> Self {
        Self {
            session: ModalSession::closed(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open
    }

    pub fn view(&self) -> Option<&dyn ModalView> {
        self.session.view.as_deref()
    }

    pub fn view_mut(&mut self) -> Option<&mut (dyn ModalView + 'static)> {
        self.session.view.as_deref_mut()
    }

    pub fn props(&self) -> &ModalProps {
        &self.session.props
    }

    /// Unconditionally replaces the current session: no queueing, no
    /// stacking. A resolver still pending from the previous session is
    /// dropped without being invoked.
    pub fn open(
        &mut self,
        view: Option<Box<dyn ModalView>>,
        props: ModalProps,
        resolver: oneshot::Sender<Value>,
    ) {
        self.session = ModalSession {
            is_open: true,
            view,
            props,
            resolver: Some(resolver),
        };
    }

    /// Delivers `value` to the awaiting caller. A session settles at most
    /// once; later calls are ignored.
    pub fn resolve(&mut self, value: Value) {
        if let Some(resolver) = self.session.resolver.take() {
            let _ = resolver.send(value);
        }
    }

    /// Settles the session with null when a view was active and never
    /// resolved, then resets to the closed defaults. A no-op on a closed
    /// session.
    pub fn close(&mut self) {
        if self.session.view.is_some() {
            self.resolve(Value::Null);
        }
        self.session = ModalSession::closed();
    }
}

impl Default for ModalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::oneshot::error::TryRecvError;
    use vitrine_ui::component::text;

    pub(super) struct StubView;

    impl ModalView for StubView {
        fn update(&mut self, _message: Message) -> Task<Message> {
            Task::none()
        }

        fn view(&self) -> Element<'_, Message> {
            text::p1_regular("stub").into()
        }
    }

    fn props(tag: &str) -> ModalProps {
        let mut props = ModalProps::new();
        props.insert("tag".to_string(), json!(tag));
        props
    }

    #[test]
    fn initial_state_is_closed() {
        let store = ModalStore::new();
        assert!(!store.is_open());
        assert!(store.view().is_none());
        assert!(store.props().is_empty());
    }

    #[test]
    fn open_sets_the_session() {
        let mut store = ModalStore::new();
        let (tx, _rx) = oneshot::channel();
        store.open(Some(Box::new(StubView)), props("a"), tx);
        assert!(store.is_open());
        assert!(store.view().is_some());
        assert_eq!(store.props()["tag"], json!("a"));
    }

    #[test]
    fn close_resolves_null_once_and_resets() {
        let mut store = ModalStore::new();
        let (tx, mut rx) = oneshot::channel();
        store.open(Some(Box::new(StubView)), props("a"), tx);
        store.close();
        assert_eq!(rx.try_recv().unwrap(), Value::Null);
        assert!(!store.is_open());
        assert!(store.view().is_none());
        assert!(store.props().is_empty());
    }

    #[test]
    fn close_on_closed_session_is_idempotent() {
        let mut store = ModalStore::new();
        store.close();
        store.close();
        assert!(!store.is_open());
    }

    #[test]
    fn close_without_view_invokes_no_resolver() {
        let mut store = ModalStore::new();
        let (tx, mut rx) = oneshot::channel();
        store.open(None, ModalProps::new(), tx);
        assert!(store.is_open());
        store.close();
        // The resolver is dropped, never called with a value.
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Closed)));
    }

    #[test]
    fn view_resolution_settles_the_session_once() {
        let mut store = ModalStore::new();
        let (tx, mut rx) = oneshot::channel();
        store.open(Some(Box::new(StubView)), ModalProps::new(), tx);
        store.resolve(json!({"answer": 42}));
        store.close();
        assert_eq!(rx.try_recv().unwrap(), json!({"answer": 42}));
        // close() found the resolver already consumed; nothing else arrives.
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Closed)));
    }

    #[test]
    fn reopening_replaces_and_never_invokes_the_first_resolver() {
        let mut store = ModalStore::new();
        let (tx_a, mut rx_a) = oneshot::channel();
        let (tx_b, mut rx_b) = oneshot::channel();
        store.open(Some(Box::new(StubView)), props("a"), tx_a);
        store.open(Some(Box::new(StubView)), props("b"), tx_b);
        assert_eq!(store.props()["tag"], json!("b"));
        // The first resolver was dropped, not called.
        assert!(matches!(rx_a.try_recv(), Err(TryRecvError::Closed)));
        store.close();
        assert_eq!(rx_b.try_recv().unwrap(), Value::Null);
    }

    #[test]
    fn resolve_after_settlement_is_ignored() {
        let mut store = ModalStore::new();
        let (tx, mut rx) = oneshot::channel();
        store.open(Some(Box::new(StubView)), ModalProps::new(), tx);
        store.resolve(json!("first"));
        store.resolve(json!("second"));
        assert_eq!(rx.try_recv().unwrap(), json!("first"));
    }
}
