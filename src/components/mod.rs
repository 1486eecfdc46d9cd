//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod list_toolbar;
mod new_item_form;
mod stats_bar;
mod todo_list_view;
mod todo_row;

pub use confirm_button::ConfirmButton;
pub use list_toolbar::ListToolbar;
pub use new_item_form::NewItemForm;
pub use stats_bar::StatsBar;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
