//! Todo List Frontend App
//!
//! Main application component.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::ListConfig;

use crate::components::{ListToolbar, NewItemForm, StatsBar, TodoListView};
use crate::context::ListContext;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::new(&config));

    // Provide context to all children
    provide_context(store);
    provide_context(ListContext::new(store));

    log::info!("[APP] mounted, initial mode {:?}", config.initial_mode);

    view! {
        <div class="todo-list">
            <NewItemForm />
            <TodoListView />
            <StatsBar />
            <ListToolbar />
        </div>
    }
}
