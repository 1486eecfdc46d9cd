//! Confirm Button Component
//!
//! Button that only runs its action after the browser confirm dialog is
//! accepted.

use leptos::prelude::*;

/// Button gated by `window.confirm`
///
/// # Arguments
/// * `button_class` - CSS class for the button (e.g., "clear-all")
/// * `label` - Button text
/// * `message` - Question shown in the confirm dialog
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=button_class
            on:click=move |ev| {
                ev.stop_propagation();
                match window().confirm_with_message(&message) {
                    Ok(true) => on_confirm.run(()),
                    Ok(false) => log::debug!("[CONFIRM] declined: {}", message),
                    Err(err) => log::warn!("[CONFIRM] dialog unavailable: {:?}", err),
                }
            }
        >
            {label}
        </button>
    }
}
