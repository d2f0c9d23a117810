use thiserror::Error;

/// A single text edit against a session buffer: replace the byte range
/// `start..end` with `text`. Insertions have `start == end`, deletions
/// have empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Edit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Edit {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Edit {
            start,
            end,
            text: String::new(),
        }
    }

    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Edit {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Why an edit was rejected. Rejected edits leave the session unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit range is reversed: start {start} > end {end}")]
    ReversedRange { start: usize, end: usize },
    #[error("edit range {start}..{end} exceeds buffer length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("edit offset {offset} is not a char boundary")]
    NotCharBoundary { offset: usize },
}

/// What an applied edit did, for callers that surface progress or
/// debug incremental behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Generation of the snapshot this update produced.
    pub generation: u64,
    /// Tokens rendered fresh for this update.
    pub recomputed_tokens: usize,
    /// Tokens carried over from the previous snapshot.
    pub reused_tokens: usize,
}
