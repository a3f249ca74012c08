use chrono::Local;

/// Look up a canned reply for the given input without any network call.
///
/// The input is trimmed and lowercased, then checked for each keyword as a
/// plain substring, in declaration order; the first hit wins. Returns
/// `None` when no keyword appears, which sends the message to the relay.
pub fn canned_reply(input: &str) -> Option<String> {
    let cleaned = input.trim().to_lowercase();

    if cleaned.contains("hello") {
        Some("Hello, sir. How can I assist you?".to_string())
    } else if cleaned.contains("time") {
        Some(format!(
            "The time is {}.",
            Local::now().format("%-I:%M:%S %p")
        ))
    } else if cleaned.contains("name") {
        Some("I am J.A.R.V.I.S, your cybernetic assistant.".to_string())
    } else if cleaned.contains("joke") {
        Some("Why did the robot go to therapy? Because it had too many breakdowns.".to_string())
    } else if cleaned.contains("hi") {
        Some("Hi there sir, how's your day today?".to_string())
    } else {
        None
    }
}
