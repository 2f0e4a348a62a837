//! List View Model
//!
//! The rows the page renders, kept one-to-one with the item store and keyed
//! by item id. Deletion is two-phase (exit animation, then removal), so
//! positions can shift while a row is leaving; nothing here is addressed by index.

use crate::item::{Item, ItemId};
use crate::random::RandomSource;

/// A rendered checklist row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    /// Entrance animation delay; `None` renders without an entrance
    pub entrance_delay_ms: Option<u32>,
    /// Exit animation playing, removal pending
    pub leaving: bool,
    /// SVG path of the pencil strikethrough
    pub stroke: String,
}

impl Row {
    fn new(item: &Item, entrance_delay_ms: Option<u32>, random: &dyn RandomSource) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
            entrance_delay_ms,
            leaving: false,
            stroke: strikethrough_path(random),
        }
    }
}

/// Slightly wobbly hand-drawn line across a 300x30 box
pub fn strikethrough_path(random: &dyn RandomSource) -> String {
    format!(
        "M 0 15 Q 75 {:.1}, 150 15 T 300 {:.1}",
        random.between(5.0, 25.0),
        random.between(10.0, 20.0)
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    /// Bumped on every full render so keyed views rebuild each row
    generation: u64,
    rows: Vec<Row>,
    /// Cosmetic fade of all rows ahead of an import
    fading: bool,
    stagger_ms: u32,
}

impl ListView {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            stagger_ms,
            ..Default::default()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: ItemId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    /// Rows still on the list, i.e. not playing their exit animation
    pub fn live_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.leaving)
    }

    /// `(items, done)` over live rows; rows playing their exit animation are not counted
    pub fn progress(&self) -> (usize, usize) {
        self.live_rows().fold((0, 0), |(total, done), row| {
            (total + 1, done + usize::from(row.completed))
        })
    }

    /// Drop every row and rebuild from `items` in order.
    /// Animated renders stagger each entrance by index.
    pub fn render_full(&mut self, items: &[Item], animated: bool, random: &dyn RandomSource) {
        self.generation += 1;
        self.fading = false;
        self.rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                let delay = animated.then(|| self.stagger_ms.saturating_mul(index));
                Row::new(item, delay, random)
            })
            .collect();
    }

    /// Add one row at the end without touching the others
    pub fn render_append(&mut self, item: &Item, random: &dyn RandomSource) {
        if self.row(item.id).is_some() {
            return;
        }
        self.rows.push(Row::new(item, Some(0), random));
    }

    /// Start the exit animation of the row. Returns false if there is no
    /// such row or it is already leaving.
    pub fn begin_delete(&mut self, id: ItemId) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) if !row.leaving => {
                row.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Remove the row once its exit animation has played. Idempotent.
    pub fn finish_delete(&mut self, id: ItemId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Patch the completed state of one row in place
    pub fn render_toggle(&mut self, id: ItemId, completed: bool) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn fade_out_all(&mut self) {
        self.fading = true;
    }
}
