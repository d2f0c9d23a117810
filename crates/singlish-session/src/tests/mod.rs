mod basic;

use super::InputSession;

/// Type `text` one char at a time through a fresh session, as a
/// keyboard driver would.
pub(super) fn type_chars(text: &str) -> InputSession {
    let mut session = InputSession::new();
    for c in text.chars() {
        let at = session.text().len();
        session
            .insert(at, c.to_string())
            .expect("append is always valid");
    }
    session
}
