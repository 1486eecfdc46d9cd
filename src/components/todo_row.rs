//! Todo Row Component
//!
//! One list entry: checkbox, text, delete button.

use leptos::prelude::*;
use todo_core::RowView;

use crate::store::{store_remove_item, store_set_checked, use_app_store};

/// A single item row in the list
#[component]
pub fn TodoRow(
    row: RowView,
    #[prop(into)] delete_label: String,
) -> impl IntoView {
    let store = use_app_store();

    let id = row.id;
    let class = row.class();
    let checked = row.checked;
    let text = row.text;

    view! {
        <li class=class>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| store_set_checked(&store, id, event_target_checked(&ev))
            />
            <span class="item">{text}</span>
            <button class="delete" on:click=move |_| store_remove_item(&store, id)>
                {delete_label}
            </button>
        </li>
    }
}
