//! Accumulating text buffer used for descriptions and dialogue.

const SEPARATOR: char = ' ';
const CONTINUATION: char = '-';

/// Lower-cased, space-joined text built line by line.
///
/// Every appended line is trimmed, lower-cased and followed by one space.
/// A line ending in `-` is treated as a word split across source lines:
/// the hyphen and the separator after it are dropped before the next line
/// is appended, so `"exam-"` + `"ple"` reads `"example "`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    buf: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: &str) {
        self.strip_continuation();
        self.buf.push_str(&line.trim().to_lowercase());
        self.buf.push(SEPARATOR);
    }

    fn strip_continuation(&mut self) {
        let content = self.buf.strip_suffix(SEPARATOR).unwrap_or(&self.buf);
        if let Some(stitched) = content.strip_suffix(CONTINUATION) {
            let len = stitched.len();
            self.buf.truncate(len);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Move the contents out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Whitespace token count, the unit of every word statistic.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
