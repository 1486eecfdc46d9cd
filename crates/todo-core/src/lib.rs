//! Todo Core
//!
//! In-memory todo list state:
//! - domain: items and the list that owns them
//! - controller: state transitions, counters, empty state
//! - view: projection of the list onto what the page shows
//! - config: labels and starting mode

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod view;

pub use config::ListConfig;
pub use domain::{DisplayMode, EmptyState, Item, ItemId, ItemText, Stats, TodoList};
pub use error::{ListError, ListResult};
pub use view::{Labels, ListView, RowView};
