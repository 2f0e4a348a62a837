//! Line-delimited import.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ImportError;

/// Latest-wins ordering of imports. Each import takes a ticket when it starts
/// and only applies its result while that ticket is still the newest.
/// Anything that replaces the list wholesale (a reset) also takes a ticket,
/// which voids every import still in flight.
#[derive(Debug, Default)]
pub struct ImportTickets {
    latest: AtomicU64,
}

impl ImportTickets {
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

/// Split `raw` into trimmed, non-blank lines in order.
///
/// An input with no usable line is an error; the caller keeps its current list.
pub fn parse_lines(raw: &str) -> Result<Vec<String>, ImportError> {
    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(lines)
}
