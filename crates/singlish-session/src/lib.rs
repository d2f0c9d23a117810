//! Stateful typing session over the conversion pipeline.
//!
//! `InputSession` owns the current buffer and its rendered snapshot and
//! applies edits as they arrive, re-rendering only the tokens the edit
//! touched. A monotonic generation counter tags every snapshot so
//! callers holding results from an earlier state can discard them:
//! last write wins, stale renders are never surfaced.

mod snapshot;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use snapshot::{DeriveStats, DocumentSnapshot};
pub use types::{Edit, EditError, UpdateSummary};

/// Stateful session encapsulating the live buffer and its conversion.
pub struct InputSession {
    snapshot: DocumentSnapshot,
    /// Bumped on every successful mutation, never reset.
    generation: u64,
}

impl InputSession {
    pub fn new() -> Self {
        InputSession {
            snapshot: DocumentSnapshot::empty(),
            generation: 0,
        }
    }

    pub fn snapshot(&self) -> &DocumentSnapshot {
        &self.snapshot
    }

    pub fn text(&self) -> &str {
        self.snapshot.text()
    }

    pub fn rendered(&self) -> &str {
        self.snapshot.rendered()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result tagged with `generation` still reflects the
    /// session state. Callers drop results for which this is false.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Replace the whole buffer, rendering from scratch.
    pub fn replace_all(&mut self, text: impl Into<String>) -> UpdateSummary {
        let text = text.into();
        let cursor = text.len();
        self.snapshot = DocumentSnapshot::from_text(text, cursor);
        self.generation += 1;
        debug!(generation = self.generation, "buffer replaced");
        UpdateSummary {
            generation: self.generation,
            recomputed_tokens: self.snapshot.tokens().len(),
            reused_tokens: 0,
        }
    }

    /// Apply one edit. On error the session is left untouched and the
    /// generation does not advance.
    pub fn apply_edit(&mut self, edit: &Edit) -> Result<UpdateSummary, EditError> {
        self.validate(edit)?;
        let mut new_text = String::with_capacity(
            self.snapshot.text().len() - (edit.end - edit.start) + edit.text.len(),
        );
        new_text.push_str(&self.snapshot.text()[..edit.start]);
        new_text.push_str(&edit.text);
        new_text.push_str(&self.snapshot.text()[edit.end..]);

        let new_edit_end = edit.start + edit.text.len();
        let (snapshot, stats) = DocumentSnapshot::derive(
            &self.snapshot,
            new_text,
            new_edit_end,
            edit.start,
            new_edit_end,
        );
        self.snapshot = snapshot;
        self.generation += 1;
        debug!(
            generation = self.generation,
            reused = stats.reused,
            recomputed = stats.recomputed,
            "edit applied"
        );
        Ok(UpdateSummary {
            generation: self.generation,
            recomputed_tokens: stats.recomputed,
            reused_tokens: stats.reused,
        })
    }

    /// Insert `text` at byte offset `at`.
    pub fn insert(&mut self, at: usize, text: impl Into<String>) -> Result<UpdateSummary, EditError> {
        self.apply_edit(&Edit::insert(at, text))
    }

    /// Delete the byte range `start..end`.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<UpdateSummary, EditError> {
        self.apply_edit(&Edit::delete(start, end))
    }

    fn validate(&self, edit: &Edit) -> Result<(), EditError> {
        let text = self.snapshot.text();
        if edit.start > edit.end {
            return Err(EditError::ReversedRange {
                start: edit.start,
                end: edit.end,
            });
        }
        if edit.end > text.len() {
            return Err(EditError::OutOfBounds {
                start: edit.start,
                end: edit.end,
                len: text.len(),
            });
        }
        for offset in [edit.start, edit.end] {
            if !text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new()
    }
}
