//! Character-level classification for Sinhala and Romanized text.

/// Al-lakuna (virama), appended to a consonant with no following vowel.
pub const AL_LAKUNA: char = '\u{0DCA}';

/// Anusvara, the pre-velar/word-final nasal sign.
pub const ANUSVARA: char = '\u{0D82}';

/// Check the full Sinhala block (U+0D80..U+0DFF). This includes a few
/// unassigned codepoints, but those never appear in rule replacements
/// or rendered output, so the block-level check is preferred over an
/// exact enumeration of the assigned ranges.
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

pub fn is_roman_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True when the string contains any Sinhala character at all.
pub fn has_sinhala(s: &str) -> bool {
    s.chars().any(is_sinhala)
}
