//! Application Context
//!
//! Shared derived state provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::ListView;

use crate::store::{store_render, AppStore};

/// Rendered list shared by all list components
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Re-rendered whenever the store's list or labels change
    pub view: Memo<ListView>,
}

impl ListContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            view: Memo::new(move |_| store_render(&store)),
        }
    }
}

pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
