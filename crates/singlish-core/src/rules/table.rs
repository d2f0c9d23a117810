/// Default Singlish-to-Sinhala rule table, embedded at compile time.
pub const DEFAULT_TOML: &str = include_str!("default_rules.toml");
