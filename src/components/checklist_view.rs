//! Checklist View Component
//!
//! Keyed rendering of the row model. Rows are keyed by item id and render
//! generation, so appends and toggles leave the other rows alone while a
//! full render rebuilds every row.

use leptos::prelude::*;

use crate::components::ChecklistRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ChecklistView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        let view = store.rows().read();
        let generation = view.generation();
        view.rows()
            .iter()
            .map(|row| (generation, row.clone()))
            .collect::<Vec<_>>()
    };

    let list_class = move || {
        if store.rows().read().is_fading() { "checklist fading" } else { "checklist" }
    };

    let progress = move || {
        let (total, done) = store.rows().read().progress();
        format!("{} items, {} done", total, done)
    };

    view! {
        <ul class=list_class>
            <For
                each=rows
                key=|(generation, row)| (*generation, row.id)
                children=move |(_, row)| view! { <ChecklistRow row=row /> }
            />
        </ul>
        <p class="item-count">{progress}</p>
    }
}
