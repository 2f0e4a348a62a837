//! File Import Component
//!
//! File picker that replaces the list with the lines of a text file.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::context::ChecklistContext;

async fn read_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    value
        .as_string()
        .ok_or_else(|| format!("{} is not a text file", file.name()))
}

#[component]
pub fn FileImport() -> impl IntoView {
    let ctx = expect_context::<ChecklistContext>();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        // Clear so picking the same file again fires another change
        input.set_value("");

        let ticket = ctx.begin_import();
        spawn_local(async move {
            match read_text(&file).await {
                Ok(text) => ctx.finish_import(ticket, text).await,
                Err(e) => {
                    log::error!("[IMPORT] {}", e);
                    ctx.notify(&e);
                }
            }
        });
    };

    view! {
        <label class="file-import">
            "Load list from file"
            <input type="file" accept=".txt,text/plain" on:change=on_change />
        </label>
    }
}
