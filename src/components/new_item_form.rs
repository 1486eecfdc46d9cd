//! New Item Form Component
//!
//! Text input that adds an item on submit or on Enter without Shift.

use leptos::prelude::*;

use crate::store::{store_add_item, store_labels, use_app_store};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let labels = store_labels(&store);

    let (new_text, set_new_text) = signal(String::new());

    // Blank text is dropped silently and the input keeps its content
    let submit = move || {
        let text = new_text.get_untracked();
        if let Some(id) = store_add_item(&store, &text) {
            log::debug!("[FORM] added item {}", id);
            set_new_text.set(String::new());
        }
    };

    view! {
        <form
            class="form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                type="text"
                placeholder=labels.add_placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button type="submit">{labels.add_button}</button>
        </form>
    }
}
