//! Wrap-Up Checklist App
//!
//! Main page: the checklist card over a snowy background, with the
//! celebration overlay on top.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CelebrationOverlay, ChecklistView, FileImport, HelpModal, NewItemForm, SnowCanvas,
};
use crate::config::load_config;
use crate::context::ChecklistContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    let store = Store::new(AppState::new(config.list.entrance_stagger_ms));
    provide_context(store);

    let ctx = ChecklistContext::new(&config, store);
    provide_context(ctx);
    log::info!("[APP] Started with {} items", config.seed_items.len());

    view! {
        <SnowCanvas count=config.snowflakes />
        <main class="container">
            <header class="header">
                <h1>"Year-End Wrap-Up"</h1>
                <HelpModal />
            </header>

            <NewItemForm />
            <ChecklistView />
            <FileImport />
        </main>
        <CelebrationOverlay />
    }
}
