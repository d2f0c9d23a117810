use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::AL_LAKUNA;

use super::{Rule, RuleContext};

#[derive(Deserialize)]
struct RulesConfig {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, VowelEntry>,
    #[serde(default)]
    extra: Vec<ExtraRule>,
}

#[derive(Deserialize)]
struct VowelEntry {
    /// Independent vowel letter, used where no consonant precedes.
    independent: String,
    /// Dependent vowel sign written after a consonant. Empty for the
    /// inherent "a".
    sign: String,
}

#[derive(Deserialize)]
struct ExtraRule {
    pattern: String,
    replacement: String,
    #[serde(default = "default_extra_priority")]
    priority: i32,
    context: Option<ContextSpec>,
}

fn default_extra_priority() -> i32 {
    100
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContextSpec {
    FollowedBy { followed_by: char },
    PrecededBy { preceded_by: char },
    Named(String),
}

impl ContextSpec {
    fn to_context(&self) -> Result<RuleContext, RulesConfigError> {
        match self {
            ContextSpec::FollowedBy { followed_by } => Ok(RuleContext::FollowedBy(*followed_by)),
            ContextSpec::PrecededBy { preceded_by } => Ok(RuleContext::PrecededBy(*preceded_by)),
            ContextSpec::Named(name) => match name.as_str() {
                "word_start" => Ok(RuleContext::WordStart),
                "word_end" => Ok(RuleContext::WordEnd),
                other => Err(RulesConfigError::UnknownContext(other.to_string())),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[consonants] table is empty")]
    NoConsonants,
    #[error("[vowels] table is empty")]
    NoVowels,
    #[error("empty pattern")]
    EmptyPattern,
    #[error("non-ASCII pattern: {0}")]
    NonAsciiPattern(String),
    #[error("empty replacement for pattern: {0}")]
    EmptyReplacement(String),
    #[error("unknown context: {0} (expected word_start or word_end)")]
    UnknownContext(String),
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

fn validate_pattern(pattern: &str) -> Result<(), RulesConfigError> {
    if pattern.is_empty() {
        return Err(RulesConfigError::EmptyPattern);
    }
    if !pattern.is_ascii() {
        return Err(RulesConfigError::NonAsciiPattern(pattern.to_string()));
    }
    Ok(())
}

/// Parse TOML text and expand it into the full rule list: independent
/// vowels, bare consonants (consonant + al-lakuna), the consonant-vowel
/// syllable cross product, and any `[[extra]]` rules verbatim.
///
/// Generated rules carry their pattern length as priority, so that the
/// intended "longer spelling wins" ordering is explicit in the data even
/// though maximal munch already guarantees it; `[[extra]]` rules default
/// to priority 100 and win same-length ties.
pub fn parse_rules_toml(toml_str: &str) -> Result<Vec<Rule>, RulesConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(RulesConfigError::NoConsonants);
    }
    if config.vowels.is_empty() {
        return Err(RulesConfigError::NoVowels);
    }

    let mut rules = Vec::new();

    for (pattern, vowel) in &config.vowels {
        validate_pattern(pattern)?;
        if vowel.independent.is_empty() {
            return Err(RulesConfigError::EmptyReplacement(pattern.clone()));
        }
        rules.push(Rule {
            pattern: pattern.clone(),
            replacement: vowel.independent.clone(),
            priority: pattern.len() as i32,
            context: RuleContext::Any,
        });
    }

    for (c_pattern, glyph) in &config.consonants {
        validate_pattern(c_pattern)?;
        if glyph.is_empty() {
            return Err(RulesConfigError::EmptyReplacement(c_pattern.clone()));
        }
        rules.push(Rule {
            pattern: c_pattern.clone(),
            replacement: format!("{glyph}{AL_LAKUNA}"),
            priority: c_pattern.len() as i32,
            context: RuleContext::Any,
        });
        for (v_pattern, vowel) in &config.vowels {
            rules.push(Rule {
                pattern: format!("{c_pattern}{v_pattern}"),
                replacement: format!("{glyph}{}", vowel.sign),
                priority: (c_pattern.len() + v_pattern.len()) as i32,
                context: RuleContext::Any,
            });
        }
    }

    for extra in &config.extra {
        validate_pattern(&extra.pattern)?;
        if extra.replacement.is_empty() {
            return Err(RulesConfigError::EmptyReplacement(extra.pattern.clone()));
        }
        let context = match &extra.context {
            Some(spec) => spec.to_context()?,
            None => RuleContext::Any,
        };
        rules.push(Rule {
            pattern: extra.pattern.clone(),
            replacement: extra.replacement.clone(),
            priority: extra.priority,
            context,
        });
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[consonants]
k = "ක"

[vowels]
a = { independent = "අ", sign = "" }
aa = { independent = "ආ", sign = "ා" }
"#;
        let rules = parse_rules_toml(toml).unwrap();
        // 2 independent vowels + 1 bare consonant + 2 syllables
        assert_eq!(rules.len(), 5);
        let ka = rules.iter().find(|r| r.pattern == "ka").unwrap();
        assert_eq!(ka.replacement, "ක");
        let kaa = rules.iter().find(|r| r.pattern == "kaa").unwrap();
        assert_eq!(kaa.replacement, "කා");
        let k = rules.iter().find(|r| r.pattern == "k").unwrap();
        assert_eq!(k.replacement, "ක්");
    }

    #[test]
    fn parse_default_toml() {
        let rules = parse_rules_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(rules.len() > 500, "expected 500+ rules, got {}", rules.len());
    }

    #[test]
    fn extra_rule_with_context() {
        let toml = r#"
[consonants]
n = "න"

[vowels]
a = { independent = "අ", sign = "" }

[[extra]]
pattern = "n"
replacement = "ං"
priority = 50
context = { followed_by = "g" }

[[extra]]
pattern = "ng"
replacement = "ං"
context = "word_end"
"#;
        let rules = parse_rules_toml(toml).unwrap();
        let nasal = rules
            .iter()
            .find(|r| r.pattern == "n" && r.priority == 50)
            .unwrap();
        assert_eq!(nasal.context, RuleContext::FollowedBy('g'));
        let final_ng = rules.iter().find(|r| r.pattern == "ng").unwrap();
        assert_eq!(final_ng.context, RuleContext::WordEnd);
        assert_eq!(final_ng.priority, 100);
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_rules_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RulesConfigError::Parse(_)));
    }

    #[test]
    fn error_no_consonants() {
        let toml = r#"
[consonants]

[vowels]
a = { independent = "අ", sign = "" }
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::NoConsonants));
    }

    #[test]
    fn error_no_vowels() {
        let toml = r#"
[consonants]
k = "ක"

[vowels]
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::NoVowels));
    }

    #[test]
    fn error_non_ascii_pattern() {
        let toml = r#"
[consonants]
"ක" = "ක"

[vowels]
a = { independent = "අ", sign = "" }
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::NonAsciiPattern(_)));
    }

    #[test]
    fn error_empty_replacement() {
        let toml = r#"
[consonants]
k = ""

[vowels]
a = { independent = "අ", sign = "" }
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::EmptyReplacement(_)));
    }

    #[test]
    fn error_unknown_context() {
        let toml = r#"
[consonants]
k = "ක"

[vowels]
a = { independent = "අ", sign = "" }

[[extra]]
pattern = "x"
replacement = "ං"
context = "sometimes"
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::UnknownContext(_)));
    }
}
