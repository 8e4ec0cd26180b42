use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared flag the root view consults to decide whether the page behind a
/// dialog may scroll.
#[derive(Debug, Clone, Default)]
pub struct ScrollState(Arc<AtomicUsize>);

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

/// Suspends page scrolling for as long as the guard is alive. Dropping it
/// restores scrolling on every path out of the open state, including
/// teardown.
#[derive(Debug)]
pub struct ScrollLock(ScrollState);

impl ScrollLock {
    pub fn engage(state: &ScrollState) -> Self {
        state.0.fetch_add(1, Ordering::SeqCst);
        Self(state.clone())
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.0 .0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_suspends_and_drop_restores() {
        let state = ScrollState::new();
        assert!(!state.is_locked());
        let lock = ScrollLock::engage(&state);
        assert!(state.is_locked());
        drop(lock);
        assert!(!state.is_locked());
    }

    #[test]
    fn replacing_a_lock_keeps_scrolling_suspended() {
        let state = ScrollState::new();
        let mut slot = Some(ScrollLock::engage(&state));
        // A replacement drops the previous guard after the new one engaged.
        slot = Some(ScrollLock::engage(&state));
        assert!(state.is_locked());
        slot.take();
        assert!(!state.is_locked());
    }
}
