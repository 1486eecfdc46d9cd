//! List Toolbar Component
//!
//! Show/hide finished toggle and the clear-all button.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_list_context;
use crate::store::{store_clear_all, store_labels, store_toggle_finished, use_app_store};

#[component]
pub fn ListToolbar() -> impl IntoView {
    let store = use_app_store();
    let labels = store_labels(&store);
    let ctx = use_list_context();

    view! {
        <div class="toolbar">
            <button
                class="toggle-finished"
                on:click=move |_| {
                    let show_finished = store_toggle_finished(&store);
                    log::debug!("[TOOLBAR] show_finished={}", show_finished);
                }
            >
                {move || ctx.view.get().toggle_label}
            </button>
            <ConfirmButton
                button_class="clear-all"
                label=labels.clear_all
                message=labels.clear_confirm
                on_confirm=move |_| store_clear_all(&store)
            />
        </div>
    }
}
