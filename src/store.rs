//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All list
//! mutations from event handlers go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ItemId, Labels, ListConfig, ListView, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The one todo list on the page
    pub list: TodoList,
    /// User-facing strings
    pub labels: Labels,
}

impl AppState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            list: config.build_list(),
            labels: config.labels.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Project the current list state for rendering
pub fn store_render(store: &AppStore) -> ListView {
    let labels = store.labels().read();
    store.list().read().render(&labels)
}

pub fn store_labels(store: &AppStore) -> Labels {
    store.labels().get_untracked()
}

/// Add an item; `None` if the text was blank
pub fn store_add_item(store: &AppStore, text: &str) -> Option<ItemId> {
    store.list().write().add_item(text)
}

/// Apply a checkbox change using the mode currently on screen
pub fn store_set_checked(store: &AppStore, id: ItemId, checked: bool) {
    store.list().write().set_item_checked(id, checked);
}

pub fn store_remove_item(store: &AppStore, id: ItemId) {
    store.list().write().remove_item(id);
}

/// Flip show/hide finished, returning the new mode
pub fn store_toggle_finished(store: &AppStore) -> bool {
    store.list().write().toggle_show_finished()
}

pub fn store_clear_all(store: &AppStore) {
    store.list().write().clear_all();
}
