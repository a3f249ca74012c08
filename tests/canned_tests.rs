use jarvis_backend::services::canned::canned_reply;

#[test]
fn test_greeting_keyword() {
    let reply = canned_reply("Hello Jarvis").unwrap();
    assert_eq!(reply, "Hello, sir. How can I assist you?");
}

#[test]
fn test_time_keyword_reports_current_time() {
    let reply = canned_reply("what time is it").unwrap();
    assert!(reply.starts_with("The time is"));
    assert!(reply.contains(':'));
}

#[test]
fn test_name_and_joke_keywords() {
    assert!(canned_reply("what is your name").unwrap().contains("J.A.R.V.I.S"));
    assert!(canned_reply("tell me a joke").unwrap().contains("robot"));
}

#[test]
fn test_case_and_whitespace_folding() {
    assert_eq!(canned_reply("  HELLO  "), canned_reply("hello"));
}

#[test]
fn test_declaration_order_wins() {
    // "hi" also appears in the input, but "time" is declared earlier.
    let reply = canned_reply("hi, what time is it").unwrap();
    assert!(reply.starts_with("The time is"));
}

#[test]
fn test_substring_match_is_naive() {
    // "this" contains "hi"; the matcher makes no word-boundary check.
    let reply = canned_reply("explain this").unwrap();
    assert!(reply.starts_with("Hi there"));
}

#[test]
fn test_unmatched_input_returns_none() {
    assert!(canned_reply("tell me about quantum physics").is_none());
    assert!(canned_reply("").is_none());
}
