//! Application Context
//!
//! Owns the item store and the completion sequencer and provides the list
//! actions to every component via the Leptos Context API.

use std::rc::Rc;

use checklist_core::{
    parse_lines, ChecklistConfig, ImportTickets, CompletionSequencer, Cue, ItemId, ItemStore, ListTiming,
    SequentialIds, StageEffects,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::audio::{report, AudioEngine};
use crate::browser::{defer, BrowserRandom, BrowserScheduler};
use crate::store::{AppStateStoreFields, AppStore};

/// Applies trigger steps to the page
struct PageStage {
    store: AppStore,
    audio: StoredValue<AudioEngine, LocalStorage>,
}

impl StageEffects for PageStage {
    fn apply(&self, cue: Cue) {
        if cue == Cue::Chime {
            self.audio.update_value(|audio| report(audio.play_chime(), "chime"));
            return;
        }
        self.store.stage().write().apply(&cue);
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    items: StoredValue<ItemStore>,
    sequencer: StoredValue<CompletionSequencer<BrowserScheduler>, LocalStorage>,
    audio: StoredValue<AudioEngine, LocalStorage>,
    store: AppStore,
    timing: ListTiming,
    /// Latest import wins; older reads are dropped when they complete
    import_tickets: StoredValue<ImportTickets>,
}

impl ChecklistContext {
    pub fn new(config: &ChecklistConfig, store: AppStore) -> Self {
        let ids = SequentialIds::starting_at(js_sys::Date::now() as u64);
        let items = ItemStore::with_seed(ids, &config.seed_items);
        store.rows().write().render_full(items.items(), false, &BrowserRandom);

        let audio = StoredValue::new_local(AudioEngine::default());
        let effects = Rc::new(PageStage { store, audio });
        let sequencer = CompletionSequencer::new(
            BrowserScheduler,
            effects,
            Rc::new(BrowserRandom),
            config.celebration.clone(),
        );

        Self {
            items: StoredValue::new(items),
            sequencer: StoredValue::new_local(sequencer),
            audio,
            store,
            timing: config.list,
            import_tickets: StoredValue::new(ImportTickets::default()),
        }
    }

    /// Add an item from the input field. Returns false for blank text.
    pub fn add(&self, text: &str) -> bool {
        let added = self
            .items
            .try_update_value(|items| items.add(text).cloned())
            .flatten();
        let Some(item) = added else { return false };

        log::info!("[LIST] Added item {}", item.id);
        self.store.rows().write().render_append(&item, &BrowserRandom);
        self.check_completion();
        true
    }

    pub fn toggle(&self, id: ItemId) {
        self.audio.update_value(|audio| report(audio.prime(), "audio init"));

        let toggled = self.items.try_update_value(|items| items.toggle(id)).flatten();
        let Some(completed) = toggled else { return };

        self.store.rows().write().render_toggle(id, completed);
        if completed {
            self.audio.update_value(|audio| report(audio.play_scratch(), "scratch"));
        }
        self.check_completion();
    }

    /// Remove the item now; its row leaves after the exit animation
    pub fn delete(&self, id: ItemId) {
        let removed = self.items.try_update_value(|items| items.delete(id)).flatten();
        if removed.is_none() {
            return;
        }

        log::info!("[LIST] Deleted item {}", id);
        if self.store.rows().write().begin_delete(id) {
            let store = self.store;
            defer(self.timing.row_exit_ms, move || {
                store.rows().write().finish_delete(id);
            });
        }
        self.check_completion();
    }

    /// Reserve a ticket for a new import; any import holding an older one is dropped
    pub fn begin_import(&self) -> u64 {
        self.import_tickets.with_value(ImportTickets::begin)
    }

    fn is_current_import(&self, ticket: u64) -> bool {
        self.import_tickets.with_value(|tickets| tickets.is_current(ticket))
    }

    /// Tell the user why an import did nothing
    pub fn notify(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }

    /// Replace the list with the lines of `raw`, or tell the user why not
    pub async fn finish_import(self, ticket: u64, raw: String) {
        if !self.is_current_import(ticket) {
            return;
        }
        let lines = match parse_lines(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("[IMPORT] Rejected file: {}", e);
                self.notify(&e.to_string());
                return;
            }
        };

        let has_rows = self.store.rows().read().live_rows().next().is_some();
        if has_rows {
            self.store.rows().write().fade_out_all();
            TimeoutFuture::new(self.timing.import_fade_ms).await;
            if !self.is_current_import(ticket) {
                return;
            }
        }

        let items = self
            .items
            .try_update_value(|items| items.replace_all(&lines).to_vec())
            .unwrap_or_default();
        self.store.rows().write().render_full(&items, true, &BrowserRandom);
        log::info!("[IMPORT] Loaded {} items", items.len());
        self.check_completion();
    }

    /// Close the celebration and start again from an empty list
    pub fn start_over(&self) {
        // Void any import still reading or fading so it cannot refill the list
        self.begin_import();
        self.items.update_value(|items| {
            self.sequencer.update_value(|sequencer| sequencer.reset(items));
        });
        self.store.rows().write().render_full(&[], false, &BrowserRandom);
    }

    fn check_completion(&self) {
        self.items.with_value(|items| {
            self.sequencer.update_value(|sequencer| {
                sequencer.check_and_maybe_trigger(items);
            });
        });
    }
}
