//! Singlish-to-Sinhala transliteration engine.
//!
//! Converts Romanized Sinhala ("Singlish") into Sinhala Unicode while
//! leaving English terms, numbers, URLs, symbols and markup untouched.
//! The pipeline is pure and total: tokenize the buffer, classify each
//! token, map transliterable tokens through the rule trie, and
//! reassemble in original order.

pub mod classify;
pub mod converter;
pub mod lexicon;
pub mod mapper;
pub mod rules;
pub mod tokenizer;
pub mod unicode;
