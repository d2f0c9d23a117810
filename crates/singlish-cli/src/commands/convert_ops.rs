use std::process;

use singlish_core::converter::{analyze, render_text, Token, TokenKind};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn convert_cmd(text: &str) {
    println!("{}", render_text(text));
}

/// Per-token breakdown of a conversion, as a table or as JSON.
pub fn inspect_cmd(text: &str, json: bool) {
    let tokens = analyze(text);
    if json {
        let out = die!(serde_json::to_string_pretty(&tokens), "Error: {}");
        println!("{out}");
        return;
    }
    for token in &tokens {
        println!(
            "{:>4}..{:<4} {:<24} {:?} -> {:?}",
            token.start,
            token.end,
            kind_label(token),
            token.raw,
            token.rendered
        );
    }
    println!("---");
    println!("{}", render_text(text));
}

fn kind_label(token: &Token) -> String {
    match &token.kind {
        TokenKind::Transliterable => "transliterable".into(),
        TokenKind::Separator => "separator".into(),
        TokenKind::Passthrough(reason) => format!("passthrough({reason:?})"),
    }
}
