//! Maximal-munch phonetic mapping of a transliterable token.

use tracing::debug_span;

use crate::lexicon::Lexicon;
use crate::rules::RuleTrie;

/// Render one transliterable token as Sinhala.
///
/// An exception override wins outright; otherwise the rule trie is
/// applied left to right, always taking the longest context-valid
/// pattern at the current position. Unmapped characters are copied
/// through unchanged, so the function is total: every token, however
/// malformed, produces some output.
pub fn map_token(word: &str) -> String {
    let _span = debug_span!("map_token", %word).entered();
    if let Some(literal) = Lexicon::global().override_for(word) {
        return literal.to_string();
    }
    apply_rules(RuleTrie::global(), word)
}

fn apply_rules(trie: &RuleTrie, word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        match trie.longest_match(&chars, i) {
            Some((len, rule)) => {
                out.push_str(&rule.replacement);
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}
