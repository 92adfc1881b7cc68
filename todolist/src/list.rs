//! Ordered, named collection of todo items.
//!
//! [`TodoList`] owns its items as values; accessors hand out borrows into
//! the list's storage, and [`TodoList::to_vec`] clones items into an
//! independent container. Insertion order is the only order.

use crate::error::{Result, TodoError};
use crate::item::TodoItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;
use tracing::debug;

/// An insertion-ordered, named list of [`TodoItem`]s.
///
/// Indexed operations (`item_at`, `mark_done_at`, `remove_at`, ...) fail
/// with [`TodoError::IndexOutOfRange`] for any index at or past the current
/// length and leave the list unchanged. Endpoint operations (`first`,
/// `last`, `shift`, `pop`) return `None` on an empty list instead of
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(default)]
    name: String,
    #[serde(default)]
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// The list's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item to the end of the list.
    pub fn add(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowed view of the items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Clone the items into an independent `Vec`, in insertion order.
    ///
    /// Mutating the returned container never affects the list.
    pub fn to_vec(&self) -> Vec<TodoItem> {
        self.items.clone()
    }

    /// The first item, or `None` on an empty list.
    pub fn first(&self) -> Option<&TodoItem> {
        self.items.first()
    }

    /// The last item, or `None` on an empty list.
    pub fn last(&self) -> Option<&TodoItem> {
        self.items.last()
    }

    /// Remove and return the first item, or `None` on an empty list.
    ///
    /// The remaining items keep their relative order.
    pub fn shift(&mut self) -> Option<TodoItem> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Remove and return the last item, or `None` on an empty list.
    pub fn pop(&mut self) -> Option<TodoItem> {
        self.items.pop()
    }

    /// The item at `index`.
    pub fn item_at(&self, index: usize) -> Result<&TodoItem> {
        self.items.get(index).ok_or(TodoError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Mutable access to the item at `index`.
    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut TodoItem> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(TodoError::IndexOutOfRange { index, len })
    }

    /// Mark the item at `index` done.
    pub fn mark_done_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index).map(|item| item.mark_done())
    }

    /// Mark the item at `index` not done.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index).map(|item| item.mark_undone())
    }

    /// Mark every item done. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        debug!(list = %self.name, count = self.items.len(), "marking all items done");
        for item in &mut self.items {
            item.mark_done();
        }
    }

    /// Mark every item not done. No-op on an empty list.
    pub fn mark_all_undone(&mut self) {
        debug!(list = %self.name, count = self.items.len(), "marking all items undone");
        for item in &mut self.items {
            item.mark_undone();
        }
    }

    /// Mark the first item with a matching title done.
    ///
    /// Returns whether a match was found; a miss mutates nothing.
    pub fn mark_done(&mut self, title: &str) -> bool {
        match self.items.iter_mut().find(|item| item.title == title) {
            Some(item) => {
                item.mark_done();
                true
            }
            None => false,
        }
    }

    /// Mark the first item with a matching title not done.
    ///
    /// Returns whether a match was found; a miss mutates nothing.
    pub fn mark_undone(&mut self, title: &str) -> bool {
        match self.items.iter_mut().find(|item| item.title == title) {
            Some(item) => {
                item.mark_undone();
                true
            }
            None => false,
        }
    }

    /// Whether every item is done. Vacuously true on an empty list.
    pub fn is_done(&self) -> bool {
        self.items.iter().all(TodoItem::is_done)
    }

    /// Remove and return the item at `index`, shifting later items left.
    pub fn remove_at(&mut self, index: usize) -> Result<TodoItem> {
        if index >= self.items.len() {
            return Err(TodoError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        debug!(list = %self.name, index, "removing todo item");
        Ok(self.items.remove(index))
    }

    /// The first item with a matching title, if any.
    pub fn find_by_title(&self, title: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.title == title)
    }

    /// The first item that is not done, if any.
    pub fn first_undone(&self) -> Option<&TodoItem> {
        self.items.iter().find(|item| !item.is_done())
    }

    /// Number of done items.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_done()).count()
    }

    /// Number of not-done items.
    pub fn undone_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_done()).count()
    }

    /// New list of the same name holding clones of the done items.
    pub fn all_done(&self) -> TodoList {
        self.filter(TodoItem::is_done)
    }

    /// New list of the same name holding clones of the not-done items.
    pub fn all_undone(&self) -> TodoList {
        self.filter(|item| !item.is_done())
    }

    /// New list of the same name holding clones of the items matching
    /// `predicate`, in their original relative order.
    ///
    /// The source list is unchanged.
    pub fn filter(&self, predicate: impl Fn(&TodoItem) -> bool) -> TodoList {
        TodoList {
            name: self.name.clone(),
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Iterate mutably over the items in insertion order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, TodoItem> {
        self.items.iter_mut()
    }
}

impl fmt::Display for TodoList {
    /// Renders a `---- name ----` header followed by one line per item,
    /// with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.name)?;
        for item in &self.items {
            write!(f, "\n{item}")?;
        }
        Ok(())
    }
}

impl IntoIterator for TodoList {
    type Item = TodoItem;
    type IntoIter = std::vec::IntoIter<TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut TodoList {
    type Item = &'a mut TodoItem;
    type IntoIter = slice::IterMut<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
