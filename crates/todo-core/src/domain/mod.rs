//! Domain Layer
//!
//! Items, the list that owns them, and the list-level display state.

mod item;
mod list;

pub use item::{Item, ItemId, ItemText};
pub use list::{DisplayMode, EmptyState, Stats, TodoList};
