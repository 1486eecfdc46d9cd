//! Finished / unfinished counters.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::store::{store_labels, use_app_store};

#[component]
pub fn StatsBar() -> impl IntoView {
    let labels = store_labels(&use_app_store());
    let ctx = use_list_context();

    view! {
        <p class="stats">
            {labels.finished} ": "
            <span class="finished">{move || ctx.view.get().finished_count}</span>
            " · "
            {labels.unfinished} ": "
            <span class="unfinished">{move || ctx.view.get().unfinished_count}</span>
        </p>
    }
}
