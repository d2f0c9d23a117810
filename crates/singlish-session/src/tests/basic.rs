use singlish_core::converter::render_text;

use super::type_chars;
use crate::{Edit, EditError, InputSession};

#[test]
fn new_session_is_empty() {
    let session = InputSession::new();
    assert_eq!(session.text(), "");
    assert_eq!(session.rendered(), "");
    assert_eq!(session.generation(), 0);
    assert!(session.snapshot().tokens().is_empty());
}

#[test]
fn replace_all_renders_from_scratch() {
    let mut session = InputSession::new();
    let summary = session.replace_all("mama gedhara yanavaa");
    assert_eq!(session.rendered(), "මම ගෙදර යනවා");
    assert_eq!(summary.generation, 1);
    assert_eq!(summary.reused_tokens, 0);
    assert_eq!(summary.recomputed_tokens, 5);
}

#[test]
fn char_by_char_typing_matches_batch_conversion() {
    let input = "oyaa heta enavaadha?";
    let session = type_chars(input);
    assert_eq!(session.text(), input);
    assert_eq!(session.rendered(), render_text(input));
    assert_eq!(session.rendered(), "ඔයා හෙට එනවාද?");
    assert_eq!(session.generation(), input.chars().count() as u64);
}

#[test]
fn typing_shows_intermediate_renderings() {
    let mut session = InputSession::new();
    session.insert(0, "m").unwrap();
    assert_eq!(session.rendered(), "ම්");
    session.insert(1, "a").unwrap();
    assert_eq!(session.rendered(), "ම");
    session.insert(2, "m").unwrap();
    assert_eq!(session.rendered(), "මම්");
    session.insert(3, "a").unwrap();
    assert_eq!(session.rendered(), "මම");
}

#[test]
fn backspace_reverts_rendering() {
    let mut session = InputSession::new();
    session.replace_all("mama");
    let len = session.text().len();
    session.delete(len - 1, len).unwrap();
    assert_eq!(session.text(), "mam");
    assert_eq!(session.rendered(), render_text("mam"));
}

#[test]
fn generation_is_monotonic_and_stale_results_detectable() {
    let mut session = InputSession::new();
    let first = session.replace_all("mama");
    assert!(session.is_current(first.generation));

    let second = session.insert(4, " enavaa").unwrap();
    assert!(second.generation > first.generation);
    assert!(!session.is_current(first.generation));
    assert!(session.is_current(second.generation));
}

#[test]
fn failed_edit_leaves_session_untouched() {
    let mut session = InputSession::new();
    session.replace_all("mama");
    let generation = session.generation();

    let err = session.apply_edit(&Edit::delete(3, 1)).unwrap_err();
    assert_eq!(err, EditError::ReversedRange { start: 3, end: 1 });

    let err = session.insert(99, "x").unwrap_err();
    assert_eq!(
        err,
        EditError::OutOfBounds {
            start: 99,
            end: 99,
            len: 4
        }
    );

    assert_eq!(session.generation(), generation);
    assert_eq!(session.text(), "mama");
}

#[test]
fn edits_must_respect_char_boundaries() {
    let mut session = InputSession::new();
    session.replace_all("මම ගෙදර");
    // Offset 1 lands inside the first three-byte Sinhala char.
    let err = session.insert(1, "x").unwrap_err();
    assert_eq!(err, EditError::NotCharBoundary { offset: 1 });
}

#[test]
fn sinhala_text_in_buffer_passes_through() {
    let mut session = InputSession::new();
    session.replace_all("mama house ගියා yesterday");
    assert_eq!(session.rendered(), "මම house ගියා yesterday");
}
