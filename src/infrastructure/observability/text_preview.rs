const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens user text for log fields: one line, at most
/// `MAX_VISIBLE_CHARS` characters, with the original size appended.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let single_line: String = trimmed
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let total_chars = single_line.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = single_line.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        single_line
    }
}
