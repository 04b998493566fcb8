//! IDE feature tests
//!
//! Tests for:
//! - Position locator
//! - Hover information
//! - Go to definition
//! - Find references and document highlight
//! - Rename
//! - Code completion
//! - Document symbols
//! - Diagnostics
//! - Analysis host

pub mod tests_completion;
pub mod tests_goto;
pub mod tests_hover;
pub mod tests_references;
pub mod tests_symbols;
