//! Phonetic mapping rules: Romanized pattern to Sinhala grapheme sequence.
//!
//! The rule set is described in TOML as a consonant table, a vowel table
//! and optional standalone rules. The loader expands these into the full
//! pattern list (independent vowels, bare consonants with al-lakuna, the
//! consonant-vowel syllable cross product) which is then frozen into a
//! byte trie used by the mapper's maximal-munch loop.

mod config;
mod table;
mod trie;

pub use config::{parse_rules_toml, RulesConfigError};
pub use table::DEFAULT_TOML;
pub use trie::RuleTrie;

/// Returns the embedded default rule table TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

/// A single mapping rule. `pattern` is an ASCII Romanized grapheme
/// sequence; `replacement` is its Sinhala rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
    pub priority: i32,
    pub context: RuleContext,
}

/// Positional constraint on a rule, evaluated against the containing
/// word token. Same-length candidates at one trie node are tried in
/// priority order; the first whose context holds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleContext {
    Any,
    /// Match must begin at the first character of the token.
    WordStart,
    /// Match must end at the last character of the token.
    WordEnd,
    /// The character after the match must equal this one.
    FollowedBy(char),
    /// The character before the match must equal this one.
    PrecededBy(char),
}

impl RuleContext {
    /// Whether a match spanning `chars[start..end]` satisfies this context.
    pub fn matches(&self, chars: &[char], start: usize, end: usize) -> bool {
        match *self {
            RuleContext::Any => true,
            RuleContext::WordStart => start == 0,
            RuleContext::WordEnd => end == chars.len(),
            RuleContext::FollowedBy(c) => chars.get(end) == Some(&c),
            RuleContext::PrecededBy(c) => start > 0 && chars[start - 1] == c,
        }
    }
}
