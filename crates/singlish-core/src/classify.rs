//! Script-origin classification: transliterate a token, or pass it
//! through untouched.
//!
//! Classification is per whitespace-delimited token, never per
//! character, so mixed-language sentences freely interleave
//! transliterated and passthrough tokens.

use serde::Serialize;
use tracing::debug;

use crate::lexicon::Lexicon;

/// Why a token was passed through unchanged. Recorded for diagnostics;
/// rendering treats all reasons alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassthroughReason {
    /// Digits, decimals, ordinals: leading digit makes the whole token
    /// one passthrough unit ("1st" is never split).
    Numeric,
    Url,
    /// A run of ASCII symbols with no letters or digits at all.
    Symbol,
    /// Characters outside the ASCII letter alphabet: emoji, Sinhala
    /// text, markup fragments. Preserved verbatim, never stripped.
    ForeignScript,
    /// Closed-membership English/technical term from the lexicon.
    ReservedTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Transliterable,
    Passthrough(PassthroughReason),
}

/// Domain suffixes that mark a token as URL-like without a scheme.
const DOMAIN_SUFFIXES: [&str; 8] = [
    ".com", ".org", ".net", ".io", ".lk", ".gov", ".edu", ".info",
];

/// Decide how a word token is treated. First match wins.
pub fn classify(word: &str) -> TokenClass {
    use PassthroughReason::*;

    let class = if starts_with_digit(word) {
        TokenClass::Passthrough(Numeric)
    } else if is_url_like(word) {
        TokenClass::Passthrough(Url)
    } else if is_symbol_run(word) {
        TokenClass::Passthrough(Symbol)
    } else if has_foreign_chars(word) {
        TokenClass::Passthrough(ForeignScript)
    } else if Lexicon::global().is_reserved(word) {
        TokenClass::Passthrough(ReservedTerm)
    } else {
        TokenClass::Transliterable
    };
    debug!(word, ?class, "classified");
    class
}

fn starts_with_digit(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn is_url_like(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.") {
        return true;
    }
    DOMAIN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

fn is_symbol_run(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_alphanumeric())
}

fn has_foreign_chars(word: &str) -> bool {
    word.chars().any(|c| !crate::unicode::is_roman_letter(c))
}

#[cfg(test)]
mod tests {
    use super::PassthroughReason::*;
    use super::*;

    #[test]
    fn test_plain_singlish_is_transliterable() {
        assert_eq!(classify("mama"), TokenClass::Transliterable);
        assert_eq!(classify("karuNaakaralaa"), TokenClass::Transliterable);
        assert_eq!(classify("mamagedharayanavaa"), TokenClass::Transliterable);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(classify("123456"), TokenClass::Passthrough(Numeric));
        assert_eq!(classify("7.30"), TokenClass::Passthrough(Numeric));
        // Ordinal: leading digit plus letters stays one passthrough unit
        assert_eq!(classify("1st"), TokenClass::Passthrough(Numeric));
    }

    #[test]
    fn test_urls() {
        assert_eq!(classify("www.google.com"), TokenClass::Passthrough(Url));
        assert_eq!(classify("lanka.lk"), TokenClass::Passthrough(Url));
        assert_eq!(classify("HTTPS://x.dev"), TokenClass::Passthrough(Url));
    }

    #[test]
    fn test_symbol_runs() {
        assert_eq!(classify("###$$$@@@"), TokenClass::Passthrough(Symbol));
        assert_eq!(classify("-->"), TokenClass::Passthrough(Symbol));
    }

    #[test]
    fn test_foreign_characters() {
        assert_eq!(classify("😊"), TokenClass::Passthrough(ForeignScript));
        assert_eq!(classify("ගියා"), TokenClass::Passthrough(ForeignScript));
        assert_eq!(
            classify("<script>alert(1)</script>"),
            TokenClass::Passthrough(ForeignScript)
        );
    }

    #[test]
    fn test_reserved_terms() {
        assert_eq!(classify("laptop"), TokenClass::Passthrough(ReservedTerm));
        assert_eq!(classify("Zoom"), TokenClass::Passthrough(ReservedTerm));
        assert_eq!(classify("OTP"), TokenClass::Passthrough(ReservedTerm));
        assert_eq!(classify("Galle"), TokenClass::Passthrough(ReservedTerm));
        assert_eq!(classify("jaffna"), TokenClass::Passthrough(ReservedTerm));
    }

    #[test]
    fn test_order_digit_beats_url() {
        // Leading digit wins even with a domain-ish suffix
        assert_eq!(classify("12.com"), TokenClass::Passthrough(Numeric));
    }
}
