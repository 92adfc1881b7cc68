//! In-memory ordered todo lists.
//!
//! This crate provides a small, insertion-ordered todo list: [`TodoItem`]
//! pairs a title with a completion flag, and [`TodoList`] owns an ordered
//! sequence of items with indexed access, bulk marking, search, filtering,
//! iteration, and a canonical text rendering.
//!
//! Lists are plain in-memory values. There is no persistence, no I/O, and
//! no internal locking; callers sharing a list across threads wrap it in
//! their own synchronization.
//!
//! ## Basic Usage
//!
//! ```rust
//! use todolist::{TodoItem, TodoList};
//!
//! # fn example() -> todolist::Result<()> {
//! let mut list = TodoList::new("Today's Todos");
//! list.add(TodoItem::new("Buy milk"));
//! list.add(TodoItem::new("Clean room"));
//!
//! list.mark_done_at(0)?;
//! assert_eq!(list.done_count(), 1);
//! assert!(!list.is_done());
//!
//! println!("{list}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod item;
mod list;

// Re-exports
pub use error::{Result, TodoError};
pub use item::TodoItem;
pub use list::TodoList;
