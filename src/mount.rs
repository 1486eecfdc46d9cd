//! Page Mounting
//!
//! Locates the list container, reads its config and mounts the app.

use leptos::prelude::*;
use thiserror::Error;
use todo_core::ListConfig;
use wasm_bindgen::JsCast;

use crate::app::App;

/// Id of the element the app mounts into
pub const CONTAINER_ID: &str = "todo-app";

/// Attribute holding the JSON [`ListConfig`]
const CONFIG_ATTRIBUTE: &str = "data-config";

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no todo list found: #{0} is missing")]
    ContainerMissing(String),
    #[error("#{0} is not an HTML element")]
    NotHtmlElement(String),
}

pub fn find_container(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::ContainerMissing(id.to_string()))?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}

/// Config from the container; malformed JSON falls back to defaults
pub fn read_config(container: &web_sys::HtmlElement) -> ListConfig {
    let raw = container.get_attribute(CONFIG_ATTRIBUTE);
    ListConfig::from_optional_json(raw.as_deref()).unwrap_or_else(|err| {
        log::warn!("[MOUNT] ignoring {}: {}", CONFIG_ATTRIBUTE, err);
        ListConfig::default()
    })
}

pub fn start(container: web_sys::HtmlElement) {
    let config = read_config(&container);
    leptos::mount::mount_to(container, move || view! { <App config=config /> }).forget();
}
