//! IDE features: High-level APIs for LSP handlers.
//!
//! This module provides the interface between the engine's [`Response`] and an
//! editor. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a response in, return data out
//! 2. **No LSP types**: Uses our own types, converted at LSP boundary
//! 3. **Composable**: Every feature starts from [`locate`] and [`classify`]
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use argdown::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(engine);
//! host.set_file_content("file:///a.argdown", "[S1]: Text.");
//!
//! let analysis = host.analysis("file:///a.argdown")?.unwrap();
//! let symbols = analysis.document_symbols();
//! ```
//!
//! [`Response`]: crate::model::Response

mod analysis;
mod classify;
mod completion;
mod diagnostics;
mod goto;
mod hover;
mod locate;
mod references;
mod rename;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use classify::{Occurrence, OccurrenceKind, SymbolFamily, classify, occurrence_at};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use diagnostics::{DIAGNOSTIC_SOURCE, Diagnostic, Severity, diagnostics};
pub use goto::{GotoResult, GotoTarget, TargetKind, find_definitions, goto_definition};
pub use hover::{HoverResult, hover, hover_at};
pub use locate::locate;
pub use references::{
    DocumentHighlight, HighlightKind, Reference, ReferenceResult, document_highlight,
    find_references, references_at,
};
pub use rename::{TextEdit, WorkspaceEdit, plan_rename, prepare_rename, rename};
pub use symbols::{DocumentSymbolKind, SymbolInfo, document_symbols};
