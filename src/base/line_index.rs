//! Line/offset conversion for document text.

use text_size::{TextRange, TextSize};

use super::position::Position;

/// Precomputed line starts for a document.
///
/// Editor characters are counted in UTF-16 code units, which is what editors send
/// by default and what the engine's column numbers count as well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte range of a line, excluding its terminating newline.
    pub fn line_range(&self, line: u32) -> Option<TextRange> {
        let start = *self.line_starts.get(line as usize)?;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map(|next| *next - TextSize::from(1))
            .unwrap_or(self.len);
        Some(TextRange::new(start, end))
    }

    /// Byte offset of a position; characters past the end of a line clamp to it.
    ///
    /// Returns `None` when the line does not exist.
    pub fn offset(&self, text: &str, position: Position) -> Option<TextSize> {
        let range = self.line_range(position.line)?;
        let line_text = &text[range];
        let mut units = 0u32;
        for (offset, ch) in line_text.char_indices() {
            if units >= position.character {
                return Some(range.start() + TextSize::from(offset as u32));
            }
            units += ch.len_utf16() as u32;
        }
        Some(range.end())
    }
}
