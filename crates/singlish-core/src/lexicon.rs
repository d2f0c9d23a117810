//! Exception lexicon: irregular whole-word renderings and reserved
//! English terms, following the same OnceLock pattern as the rule trie.
//!
//! Overrides take unconditional precedence over phonetic rules when a
//! full token matches; reserved terms make the classifier pass a token
//! through unchanged. Both lookups are case-insensitive on the whole
//! token, never on substrings.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Deserialize)]
struct LexiconConfig {
    #[serde(default)]
    overrides: BTreeMap<String, String>,
    #[serde(default)]
    reserved: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("key must be lowercase ASCII: {0}")]
    NonLowercaseKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct Lexicon {
    overrides: HashMap<String, String>,
    reserved: HashSet<String>,
}

impl Lexicon {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    /// Literal rendering for a whole token, if an override exists.
    pub fn override_for(&self, token: &str) -> Option<&str> {
        self.overrides
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether the token is a reserved English/technical term.
    pub fn is_reserved(&self, token: &str) -> bool {
        self.reserved.contains(&token.to_ascii_lowercase())
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }
}

fn validate_key(key: &str) -> Result<(), LexiconError> {
    let lowercase = !key.is_empty()
        && key.is_ascii()
        && !key.chars().any(|c| c.is_ascii_uppercase());
    if !lowercase {
        return Err(LexiconError::NonLowercaseKey(key.to_string()));
    }
    Ok(())
}

/// Parse and validate lexicon TOML.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    let mut overrides = HashMap::new();
    for (key, value) in config.overrides {
        validate_key(&key)?;
        if value.is_empty() {
            return Err(LexiconError::EmptyValue(key));
        }
        overrides.insert(key, value);
    }

    let mut reserved = HashSet::new();
    for term in config.reserved {
        validate_key(&term)?;
        reserved.insert(term);
    }

    Ok(Lexicon { overrides, reserved })
}
