//! Foundation types shared by every other module.
//!
//! - [`Span`] - 1-based, end-inclusive engine spans
//! - [`Position`], [`Range`], [`Location`] - 0-based editor coordinates
//! - [`LineIndex`] - position to byte offset conversion
//!
//! This module has NO dependencies on other argdown modules.

mod line_index;
mod position;
mod span;

pub use line_index::LineIndex;
pub use position::{Location, Position, Range};
pub use span::Span;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
