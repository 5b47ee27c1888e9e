//! Deferred UI refresh tasks.
//!
//! A settings callback may need the screen to re-sort or re-layout, but not
//! in the middle of the callback — the refresh runs after the current UI
//! frame, on the same thread. [`FrameTaskQueue`] makes that explicit: a
//! FIFO queue, drained once per frame, no cancellation. Tasks scheduled
//! while a frame is draining run the next frame.

use std::collections::VecDeque;

/// The screen a task targets. Tasks for a screen that is no longer open
/// are discarded at drain time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// The grid browsing screen.
    Grid,
}

/// What the screen should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Re-sort the stack view.
    SortView,
    /// Re-initialize the screen layout (size changed).
    Relayout,
}

/// One deferred refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTask {
    /// Target screen.
    pub screen: ScreenKind,
    /// Requested action.
    pub action: UiAction,
}

/// Single-threaded cooperative task queue, drained once per UI frame.
#[derive(Debug, Default)]
pub struct FrameTaskQueue {
    queue: VecDeque<UiTask>,
}

impl FrameTaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` for the next drain.
    pub fn schedule(&mut self, task: UiTask) {
        self.queue.push_back(task);
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drains the tasks queued up to this frame, in FIFO order, returning
    /// the actions for the currently-open `screen`. Tasks targeting other
    /// screens are dropped. Anything scheduled during processing of the
    /// returned actions lands in the queue for the next frame.
    pub fn drain_frame(&mut self, screen: ScreenKind) -> Vec<UiAction> {
        let pending = std::mem::take(&mut self.queue);
        pending
            .into_iter()
            .filter(|task| task.screen == screen)
            .map(|task| task.action)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
