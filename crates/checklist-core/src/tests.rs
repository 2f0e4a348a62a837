//! Checklist Scenario Tests
//!
//! Store, view and sequencer driven together the way the page drives them.

use std::rc::Rc;
use std::time::Duration;

use crate::config::ChecklistConfig;
use crate::ids::SequentialIds;
use crate::import::{parse_lines, ImportTickets};
use crate::list_view::ListView;
use crate::sequencer::{CompletionSequencer, Cue, SequencerState};
use crate::stage::{OverlayPhase, TreeMotion};
use crate::store::ItemStore;
use crate::testing::{FixedRandom, ManualScheduler, RecordingStage};
use crate::ImportError;

struct Page {
    clock: ManualScheduler,
    stage: Rc<RecordingStage>,
    store: ItemStore,
    view: ListView,
    sequencer: CompletionSequencer<ManualScheduler>,
}

impl Page {
    fn seeded() -> Self {
        let config = ChecklistConfig::default();
        let clock = ManualScheduler::new();
        let stage = Rc::new(RecordingStage::new(clock.clone()));
        let store = ItemStore::with_seed(SequentialIds::starting_at(1), &config.seed_items);
        let mut view = ListView::new(config.list.entrance_stagger_ms);
        view.render_full(store.items(), false, &FixedRandom(0.5));
        let sequencer = CompletionSequencer::new(
            clock.clone(),
            stage.clone(),
            Rc::new(FixedRandom(0.5)),
            config.celebration,
        );
        Self { clock, stage, store, view, sequencer }
    }

    fn toggle(&mut self, index: usize) {
        let id = self.store.items()[index].id;
        if let Some(completed) = self.store.toggle(id) {
            self.view.render_toggle(id, completed);
        }
        self.sequencer.check_and_maybe_trigger(&self.store);
    }

    fn import(&mut self, raw: &str) -> Result<(), ImportError> {
        let lines = parse_lines(raw)?;
        self.view.fade_out_all();
        self.store.replace_all(&lines);
        self.view.render_full(self.store.items(), true, &FixedRandom(0.5));
        self.sequencer.check_and_maybe_trigger(&self.store);
        Ok(())
    }

    fn marker_times(&self) -> Vec<u128> {
        self.stage
            .cues()
            .iter()
            .filter(|(_, cue)| matches!(cue, Cue::DropMarker(_)))
            .map(|(at, _)| *at)
            .collect()
    }
}

#[test]
fn test_completing_seed_list_plays_sequence_once() {
    let mut page = Page::seeded();
    assert_eq!(page.store.len(), 5);

    for index in 0..4 {
        page.toggle(index);
    }
    assert_eq!(page.sequencer.state(), SequencerState::Idle);

    page.clock.advance(Duration::from_millis(250));
    page.toggle(4);
    assert_eq!(page.sequencer.state(), SequencerState::Running);
    assert_eq!(page.sequencer.triggered(), 1);

    page.clock.advance(Duration::from_secs(3));
    let offsets: Vec<u128> = page.marker_times().iter().map(|at| at - 250).collect();
    assert_eq!(offsets, vec![800, 1100, 1400, 1700, 2000]);

    let stage = page.stage.snapshot();
    assert_eq!(stage.overlay, OverlayPhase::Visible);
    assert_eq!(stage.tree, TreeMotion::Pulsing);
    assert_eq!(stage.markers.len(), 5);
    assert_eq!(stage.sparkles.len(), 40);
    assert!(page.view.live_rows().all(|row| row.completed));
}

#[test]
fn test_retoggling_after_trigger_does_not_replay() {
    let mut page = Page::seeded();
    for index in 0..5 {
        page.toggle(index);
    }
    page.toggle(2);
    page.toggle(2);
    page.clock.advance(Duration::from_secs(3));

    assert_eq!(page.sequencer.triggered(), 1);
    assert_eq!(page.marker_times().len(), 5);
}

#[test]
fn test_start_over_returns_to_idle_with_empty_list() {
    let mut page = Page::seeded();
    for index in 0..5 {
        page.toggle(index);
    }
    page.clock.advance(Duration::from_millis(1000));

    page.sequencer.reset(&mut page.store);
    page.view.render_full(page.store.items(), false, &FixedRandom(0.5));

    assert_eq!(page.sequencer.state(), SequencerState::Idle);
    assert!(page.store.is_empty());
    assert!(!page.store.is_all_complete());
    assert!(page.view.rows().is_empty());

    // Markers still queued at reset never land
    page.clock.advance(Duration::from_secs(3));
    assert_eq!(page.marker_times().len(), 1);
    let stage = page.stage.snapshot();
    assert!(stage.markers.is_empty());
    assert_eq!(stage.overlay, OverlayPhase::Hidden);
}

#[test]
fn test_import_replaces_list() {
    let mut page = Page::seeded();
    page.toggle(0);
    page.import("a\n\nb \n  \nc").unwrap();

    let texts: Vec<&str> = page.store.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
    assert_eq!(page.store.completed_count(), 0);
    assert_eq!(page.view.rows().len(), 3);
    assert!(!page.view.is_fading());
}

#[test]
fn test_empty_import_keeps_current_list() {
    let mut page = Page::seeded();
    let before = page.store.items().to_vec();

    assert_eq!(page.import(""), Err(ImportError::Empty));
    assert_eq!(page.import("   \n\n \t"), Err(ImportError::Empty));
    assert_eq!(page.store.items(), before.as_slice());
    assert_eq!(page.view.rows().len(), 5);
}

#[test]
fn test_deleting_last_incomplete_item_triggers() {
    let mut page = Page::seeded();
    for index in 0..4 {
        page.toggle(index);
    }
    let last = page.store.items()[4].id;
    page.store.delete(last);
    page.view.begin_delete(last);
    assert!(page.sequencer.check_and_maybe_trigger(&page.store));

    page.clock.advance(Duration::from_millis(400));
    assert!(page.view.finish_delete(last));
    assert_eq!(page.view.rows().len(), 4);
}

#[test]
fn test_start_over_during_import_fade_keeps_list_empty() {
    let mut page = Page::seeded();
    let tickets = ImportTickets::default();

    // File read done, old rows fading out
    let ticket = tickets.begin();
    let lines = parse_lines("x\ny").unwrap();
    page.view.fade_out_all();

    // Start over before the fade ends
    tickets.begin();
    page.sequencer.reset(&mut page.store);
    page.view.render_full(page.store.items(), false, &FixedRandom(0.5));

    if tickets.is_current(ticket) {
        page.store.replace_all(&lines);
        page.view.render_full(page.store.items(), true, &FixedRandom(0.5));
    }
    assert!(page.store.is_empty());
    assert!(page.view.rows().is_empty());
}
