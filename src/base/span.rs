//! Engine-side source spans and the conversion into editor ranges.
//!
//! The language engine reports locations the way its tokenizer does: lines and
//! columns are 1-based and the end column points *at* the last character of the
//! token. Editors want 0-based, end-exclusive ranges. Shifting the start by one and
//! keeping the end column as-is bridges both conventions.

use serde::Deserialize;

use super::position::{Position, Range};

/// A 1-based, end-inclusive span as produced by the language engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Span {
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A span covering a single line.
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self::new(line, start_column, line, end_column)
    }

    /// Line-range containment (columns are not checked on any line).
    pub fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Check whether `other` lies entirely within this span.
    pub fn encloses(&self, other: &Span) -> bool {
        let starts_before =
            (self.start_line, self.start_column) <= (other.start_line, other.start_column);
        let ends_after = (self.end_line, self.end_column) >= (other.end_line, other.end_column);
        starts_before && ends_after
    }

    /// Convert into an editor range.
    pub fn to_range(&self) -> Range {
        Range {
            start: Position::new(
                self.start_line.saturating_sub(1),
                self.start_column.saturating_sub(1),
            ),
            end: Position::new(self.end_line.saturating_sub(1), self.end_column),
        }
    }
}

impl From<Span> for Range {
    fn from(span: Span) -> Self {
        span.to_range()
    }
}
