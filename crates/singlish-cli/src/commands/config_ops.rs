use std::fs;
use std::process;

use singlish_core::lexicon::{self, Lexicon};
use singlish_core::rules::{self, RuleTrie};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn rules_export() {
    print!("{}", rules::default_toml());
}

pub fn rules_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let parsed = die!(rules::parse_rules_toml(&content), "Error: {}");
    println!("OK: {} rules", parsed.len());
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let parsed = die!(lexicon::parse_lexicon_toml(&content), "Error: {}");
    println!(
        "OK: {} overrides, {} reserved terms",
        parsed.override_count(),
        parsed.reserved_count()
    );
}

/// Install custom tables before any conversion runs. Must be called
/// before the first lookup; a custom table after that is an error.
pub fn init_custom_tables(rules_file: Option<&str>, lexicon_file: Option<&str>) {
    if let Some(file) = rules_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RuleTrie::init_custom(content), "Error loading rules: {}");
    }
    if let Some(file) = lexicon_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Lexicon::init_custom(content), "Error loading lexicon: {}");
    }
}
