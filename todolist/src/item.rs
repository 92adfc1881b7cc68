//! A single todo item: a title plus a completion flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task with a title and a completion flag.
///
/// New items start not done. The title is set at construction but the
/// fields are public; the owning list imposes no immutability of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Task label
    pub title: String,
    /// Completion state
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    /// Create a new item with the given title, not yet done.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Mark this item done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark this item not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Current completion state.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl fmt::Display for TodoItem {
    /// Renders as `[X] title` when done, `[ ] title` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(f, "[{marker}] {}", self.title)
    }
}
