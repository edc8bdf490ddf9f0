use std::fmt;
use std::ops::Deref;

/// Characters that terminate a line, in addition to `\r\n` which counts once.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Unicode whitespace plus the file, group, record and unit separators.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// A single non-empty, trimmed line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(String);

impl Line {
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches(is_blank);
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits raw input into trimmed, non-empty lines, keeping their order.
///
/// `\r\n` is one boundary; lone `\r`, form feeds, file/group/record
/// separators, NEL and the Unicode line/paragraph separators are boundaries
/// too.
pub fn split_lines(text: Option<&str>) -> Vec<Line> {
    let Some(text) = text else {
        return Vec::new();
    };

    // "\r\n" splits into a segment and an empty one; the empty one is dropped.
    text.split(LINE_BREAKS).filter_map(Line::new).collect()
}
