use sentimeter::infrastructure::observability::preview_text;

#[test]
fn given_blank_text_when_previewing_then_returns_empty_marker() {
    assert_eq!(preview_text("  \n "), "[EMPTY]");
}

#[test]
fn given_short_multiline_text_when_previewing_then_flattens_to_one_line() {
    assert_eq!(preview_text("good\nbad"), "good bad");
}

#[test]
fn given_long_text_when_previewing_then_truncates_and_reports_length() {
    let text = "é".repeat(120);
    let preview = preview_text(&text);

    assert!(preview.starts_with(&"é".repeat(80)));
    assert!(preview.ends_with("... (120 chars total)"));
}
