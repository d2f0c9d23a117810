//! End-to-end conversion pipeline: tokenize, classify, map, reassemble.
//!
//! [`render_text`] is the one-call entry point used by the session layer
//! and the CLI. [`analyze`] exposes the per-token view for inspection
//! tooling. Both are pure functions of the input string and the loaded
//! rule/lexicon tables, so repeated calls on the same input always
//! produce the same output.

use serde::Serialize;
use tracing::debug_span;

use crate::classify::{classify, PassthroughReason, TokenClass};
use crate::mapper::map_token;
use crate::tokenizer::{tokenize, Segment, SegmentKind};

/// What the pipeline decided to do with a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Transliterable,
    Passthrough(PassthroughReason),
    Separator,
}

/// A fully rendered token. `raw` and the byte span refer to the input;
/// `rendered` is what joins into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub raw: String,
    /// Byte offset of the token start in the input.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
    pub kind: TokenKind,
    pub rendered: String,
}

/// Render a single segment. Separators and passthrough words keep their
/// raw text verbatim; transliterable words go through the lexicon and
/// the rule trie.
pub fn render_segment(segment: &Segment) -> Token {
    let (kind, rendered) = match segment.kind {
        SegmentKind::Separator => (TokenKind::Separator, segment.text.clone()),
        SegmentKind::Word => match classify(&segment.text) {
            TokenClass::Passthrough(reason) => {
                (TokenKind::Passthrough(reason), segment.text.clone())
            }
            TokenClass::Transliterable => (TokenKind::Transliterable, map_token(&segment.text)),
        },
    };
    Token {
        raw: segment.text.clone(),
        start: segment.start,
        end: segment.end,
        kind,
        rendered,
    }
}

/// Tokenize and render `input`, returning the full per-token breakdown.
/// The tokens partition the input: concatenating `raw` fields gives the
/// input back, concatenating `rendered` fields gives [`render_text`]'s
/// output.
pub fn analyze(input: &str) -> Vec<Token> {
    let _span = debug_span!("analyze", len = input.len()).entered();
    tokenize(input).iter().map(render_segment).collect()
}

/// Convert a whole string of Singlish to Sinhala script. Passthrough
/// tokens and separators are preserved byte-for-byte, so the output
/// keeps the input's spacing, punctuation and line-break markers.
pub fn render_text(input: &str) -> String {
    analyze(input).iter().map(|t| t.rendered.as_str()).collect()
}
