//! Page State Store
//!
//! Uses Leptos reactive_stores so the list and the celebration stage
//! update independently.

use leptos::prelude::*;
use reactive_stores::Store;

use checklist_core::{ListView, Stage};

/// Everything the page renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Checklist rows, one per item
    pub rows: ListView,
    /// Completion overlay
    pub stage: Stage,
}

impl AppState {
    pub fn new(entrance_stagger_ms: u32) -> Self {
        Self {
            rows: ListView::new(entrance_stagger_ms),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
