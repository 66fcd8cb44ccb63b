//! Ordered board snapshots, one per move plus the empty starting board.

use super::{Board, Move};
use serde::Serialize;
use tracing::instrument;

/// Move history.
///
/// Entry 0 is always the empty board. Entries are never edited once pushed;
/// moving after a jump truncates the later entries instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
        }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: entry 0 is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.entries.get(step)
    }

    /// All snapshots in order.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Drops every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        self.entries.truncate(step + 1);
    }

    /// Appends a snapshot.
    pub(crate) fn push(&mut self, board: Board) {
        self.entries.push(board);
    }

    /// The move that produced entry `step`. `None` for step 0 or out of range.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.entries.get(step - 1)?;
        let after = self.entries.get(step)?;
        Move::between(before, after)
    }

    /// Move-list label for `step`.
    pub fn label(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
