//! Todo List View Component
//!
//! The item sequence and the empty-state message.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_list_context;
use crate::store::{store_labels, use_app_store};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();
    let labels = store_labels(&store);
    let ctx = use_list_context();

    let delete_label = labels.delete.clone();
    let rows = move || ctx.view.get().rows;

    view! {
        <p class=move || if ctx.view.get().empty_indicator_visible { "empty" } else { "empty hidden" }>
            {labels.empty}
        </p>
        <ul class=move || if ctx.view.get().sequence_hidden { "list hidden" } else { "list" }>
            <For
                each=rows
                // Every field that changes the row's markup
                key=|row| (row.id, row.checked, row.hidden)
                children=move |row| {
                    view! { <TodoRow row=row delete_label=delete_label.clone() /> }
                }
            />
        </ul>
    }
}
