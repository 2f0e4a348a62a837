//! Checklist Row Component
//!
//! A single item row. Clicking the body toggles it, the × deletes it.

use leptos::prelude::*;

use checklist_core::Row;

use crate::context::ChecklistContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ChecklistRow(row: Row) -> impl IntoView {
    let ctx = expect_context::<ChecklistContext>();
    let store = use_app_store();

    let id = row.id;
    let entrance = row.entrance_delay_ms;
    let style = entrance.map(|ms| format!("animation-delay: {}ms;", ms)).unwrap_or_default();

    // Read live so a toggle or delete patches this row in place
    let row_class = move || {
        let view = store.rows().read();
        let mut c = String::from("checklist-item");
        if entrance.is_some() { c.push_str(" entering"); }
        if let Some(current) = view.row(id) {
            if current.completed { c.push_str(" completed"); }
            if current.leaving { c.push_str(" fade-out"); }
        }
        c
    };

    view! {
        <li class=row_class data-id=id.to_string() style=style on:click=move |_| ctx.toggle(id)>
            <div class="custom-checkbox">
                <span class="tick">"✓"</span>
            </div>
            <div class="checklist-item-text">
                {row.text.clone()}
                <svg class="strikethrough-svg" viewBox="0 0 300 30" preserveAspectRatio="none">
                    <path class="strikethrough-path" d=row.stroke.clone() />
                </svg>
            </div>
            <button
                class="delete-btn"
                aria-label="Delete item"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete(id);
                }
            >
                "×"
            </button>
        </li>
    }
}
