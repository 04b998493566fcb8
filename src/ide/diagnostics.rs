//! Diagnostics: Parser errors reported by the language engine.

use std::sync::Arc;

use crate::base::Range;
use crate::model::{ParserError, Response};

/// Name reported as the origin of every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "argdown";

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub source: &'static str,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(range: Range, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            source: DIAGNOSTIC_SOURCE,
            message: message.into(),
        }
    }
}

impl From<&ParserError> for Diagnostic {
    fn from(error: &ParserError) -> Self {
        Diagnostic::error(error.token.to_range(), error.message.as_str())
    }
}

/// One error diagnostic per parser error, in the engine's order.
pub fn diagnostics(response: &Response) -> Vec<Diagnostic> {
    response.parser_errors.iter().map(Diagnostic::from).collect()
}
