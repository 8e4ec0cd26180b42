use iced::widget::text_input;
use iced::Task;

use super::Message;

/// A focusable widget of the active view, with the message to feed back to
/// the view when focus leaves it.
#[derive(Debug, Clone)]
pub struct FocusTarget {
    pub id: text_input::Id,
    pub on_blur: Option<Message>,
}

impl FocusTarget {
    pub fn new(id: text_input::Id) -> Self {
        Self { id, on_blur: None }
    }

    pub fn on_blur(mut self, message: Message) -> Self {
        self.on_blur = Some(message);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
    /// Focus rests on the dialog container itself, as it does right after
    /// the transition to open.
    Container,
    Item(usize),
}

/// Confines keyboard focus to the focusable widgets of the open dialog.
///
/// The target list is supplied fresh on every move; only the position is
/// retained here. Tab from the last target wraps to the first, shift+Tab
/// from the first wraps to the last.
#[derive(Debug)]
pub struct FocusRing {
    position: RingPosition,
}

impl FocusRing {
    pub fn new() -> Self {
        Self {
            position: RingPosition::Container,
        }
    }

    pub fn position(&self) -> RingPosition {
        self.position
    }

    /// Puts focus back on the dialog container.
    pub fn reset(&mut self) {
        self.position = RingPosition::Container;
    }

    /// Moves focus to the first target, if there is one.
    pub fn focus_first(&mut self, targets: &[FocusTarget]) -> Task<Message> {
        match targets.first() {
            Some(target) => {
                self.position = RingPosition::Item(0);
                text_input::focus(target.id.clone())
            }
            None => {
                self.position = RingPosition::Container;
                Task::none()
            }
        }
    }

    /// Moves focus one target along the ring, wrapping at both ends, and
    /// reports the blur message of the target being left, if any. With no
    /// targets this is a no-op.
    pub fn advance(
        &mut self,
        targets: &[FocusTarget],
        reverse: bool,
    ) -> (Option<Message>, Task<Message>) {
        if targets.is_empty() {
            self.position = RingPosition::Container;
            return (None, Task::none());
        }
        let len = targets.len();
        let (blurred, next) = match self.position {
            RingPosition::Container => (None, if reverse { len - 1 } else { 0 }),
            // The list may have shrunk since the last move (step switch).
            RingPosition::Item(i) if i >= len => (None, if reverse { len - 1 } else { 0 }),
            RingPosition::Item(i) => (
                targets[i].on_blur.clone(),
                if reverse { (i + len - 1) % len } else { (i + 1) % len },
            ),
        };
        self.position = RingPosition::Item(next);
        (blurred, text_input::focus(targets[next].id.clone()))
    }
}

impl Default for FocusRing {
    fn default() -> Self {
        Self::new()
    }
}
