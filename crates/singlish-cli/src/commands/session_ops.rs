use singlish_session::InputSession;

/// Simulate typing `text` one character at a time, printing the
/// rendered buffer after each keystroke. Shows what a live input field
/// wired to the session would display.
pub fn type_cmd(text: &str, quiet: bool) {
    let mut session = InputSession::new();
    for c in text.chars() {
        let at = session.text().len();
        // Appending at the end of the buffer cannot fail validation.
        let summary = session
            .insert(at, c.to_string())
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
        if !quiet {
            println!(
                "{c:?} [gen {} reuse {}/{}] {}",
                summary.generation,
                summary.reused_tokens,
                summary.reused_tokens + summary.recomputed_tokens,
                session.rendered()
            );
        }
    }
    println!("{}", session.rendered());
}
