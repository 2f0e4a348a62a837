//! New Item Form Component
//!
//! Text field plus Add button. Enter submits the form.

use leptos::prelude::*;

use crate::context::ChecklistContext;

/// Form for appending one item to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = expect_context::<ChecklistContext>();
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
