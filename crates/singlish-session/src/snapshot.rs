//! Immutable view of a session buffer and its rendered form.
//!
//! A snapshot owns the raw text, the rendered tokens partitioning it,
//! and the joined Sinhala output. Edits never mutate a snapshot; they
//! derive a new one, reusing rendered tokens outside the edited span so
//! per-keystroke work stays proportional to the touched region.

use singlish_core::converter::{render_segment, Token, TokenKind};
use singlish_core::tokenizer::{tokenize, SegmentKind};
use tracing::debug;

/// Token reuse accounting for one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeriveStats {
    pub reused: usize,
    pub recomputed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    text: String,
    cursor: usize,
    tokens: Vec<Token>,
    rendered: String,
}

impl DocumentSnapshot {
    pub fn empty() -> Self {
        DocumentSnapshot {
            text: String::new(),
            cursor: 0,
            tokens: Vec::new(),
            rendered: String::new(),
        }
    }

    /// Render `text` from scratch.
    pub fn from_text(text: String, cursor: usize) -> Self {
        let tokens: Vec<Token> = tokenize(&text).iter().map(render_segment).collect();
        let rendered = joined(&tokens);
        DocumentSnapshot {
            text,
            cursor,
            tokens,
            rendered,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Derive the snapshot for `new_text`, which differs from `prev`
    /// only inside `edit_start..new_edit_end` (offsets into `new_text`).
    /// Tokens strictly before the edit keep their spans; tokens strictly
    /// after it are shifted by the length delta. Both kinds are reused
    /// when their raw text is unchanged; everything else is re-rendered.
    pub fn derive(
        prev: &Self,
        new_text: String,
        cursor: usize,
        edit_start: usize,
        new_edit_end: usize,
    ) -> (Self, DeriveStats) {
        let delta = new_text.len() as i64 - prev.text.len() as i64;
        let mut stats = DeriveStats::default();
        let mut tokens = Vec::new();

        for segment in tokenize(&new_text) {
            let reusable = if segment.end <= edit_start {
                prev.token_at(segment.start)
                    .filter(|t| t.end == segment.end && t.raw == segment.text)
                    .cloned()
            } else if segment.start >= new_edit_end && delta <= segment.start as i64 {
                let old_start = (segment.start as i64 - delta) as usize;
                prev.token_at(old_start)
                    .filter(|t| t.raw == segment.text)
                    .map(|t| Token {
                        start: segment.start,
                        end: segment.end,
                        ..t.clone()
                    })
            } else {
                None
            };
            match reusable {
                Some(token) if kind_matches(&token, segment.kind) => {
                    stats.reused += 1;
                    tokens.push(token);
                }
                _ => {
                    stats.recomputed += 1;
                    tokens.push(render_segment(&segment));
                }
            }
        }

        debug!(
            reused = stats.reused,
            recomputed = stats.recomputed,
            "derived snapshot"
        );
        let rendered = joined(&tokens);
        (
            DocumentSnapshot {
                text: new_text,
                cursor,
                tokens,
                rendered,
            },
            stats,
        )
    }

    fn token_at(&self, start: usize) -> Option<&Token> {
        self.tokens
            .binary_search_by_key(&start, |t| t.start)
            .ok()
            .map(|i| &self.tokens[i])
    }
}

fn kind_matches(token: &Token, kind: SegmentKind) -> bool {
    matches!(
        (&token.kind, kind),
        (TokenKind::Separator, SegmentKind::Separator)
    ) || (token.kind != TokenKind::Separator && kind == SegmentKind::Word)
}

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.rendered.as_str()).collect()
}
