//! AnalysisHost and Analysis: Unified state management for IDE features.
//!
//! The `AnalysisHost` owns the open documents and the language engine, and hands
//! out `Analysis` snapshots for querying. Every snapshot comes from a fresh engine
//! run over the current text, so all queries on one snapshot see the same model.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new(CommandEngine::new("argdown-engine"));
//!
//! // Apply document changes
//! host.set_file_content("file:///notes.argdown", "[S1]: Text.");
//!
//! // Get a snapshot for queries
//! let analysis = host.analysis("file:///notes.argdown")?.unwrap();
//! let hover = analysis.hover(Position::new(0, 1));
//! let symbols = analysis.document_symbols();
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{LineIndex, Position, Range};
use crate::engine::{
    EngineConfig, EngineError, EngineRequest, LanguageEngine, input_path_for_uri,
};
use crate::model::Response;

use super::{
    CompletionItem, Diagnostic, DocumentHighlight, GotoResult, HoverResult, ReferenceResult,
    SymbolInfo, WorkspaceEdit,
};

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a snapshot via `analysis()`.
pub struct AnalysisHost<E> {
    engine: E,
    config: EngineConfig,
    /// Open document texts keyed by URI.
    documents: FxHashMap<Arc<str>, Arc<str>>,
}

impl<E: LanguageEngine> AnalysisHost<E> {
    /// Create a host with the default engine configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, EngineConfig::default())
    }

    pub fn with_config(engine: E, config: EngineConfig) -> Self {
        Self {
            engine,
            config,
            documents: FxHashMap::default(),
        }
    }

    /// Replace the engine configuration; applies to the next snapshot.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the content of a document.
    pub fn set_file_content(&mut self, uri: &str, content: &str) {
        self.documents.insert(Arc::from(uri), Arc::from(content));
    }

    /// Remove a document from storage.
    pub fn remove_file(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    /// Check if a document is open.
    pub fn has_file(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    /// Get the number of open documents.
    pub fn file_count(&self) -> usize {
        self.documents.len()
    }

    /// Run the engine over a document and return a snapshot for querying.
    ///
    /// Returns `Ok(None)` if the document is not open.
    pub fn analysis(&self, uri: &str) -> Result<Option<Analysis>, EngineError> {
        let Some((uri, text)) = self.documents.get_key_value(uri) else {
            return Ok(None);
        };

        let mut request = EngineRequest::new(text.to_string(), &self.config);
        if self.config.send_input_path {
            if let Some(path) = input_path_for_uri(uri) {
                request = request.with_input_path(path);
            }
        }

        debug!(uri = %uri, process = ?request.process, "running language engine");
        let response = self.engine.run(&request)?;

        Ok(Some(Analysis::new(uri.clone(), text.clone(), response)))
    }
}

/// An immutable snapshot of one document's analysis.
///
/// All positions are editor positions: 0-based, with end-exclusive ranges.
pub struct Analysis {
    uri: Arc<str>,
    text: Arc<str>,
    response: Response,
    line_index: LineIndex,
}

impl Analysis {
    /// Wrap an engine response for `text`.
    pub fn new(uri: Arc<str>, text: Arc<str>, response: Response) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            uri,
            text,
            response,
            line_index,
        }
    }

    // ==================== Symbol-based features ====================

    /// Get hover information at a position.
    pub fn hover(&self, position: Position) -> Option<HoverResult> {
        super::hover_at(&self.response, position)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, position: Position) -> GotoResult {
        super::goto_definition(&self.response, &self.uri, position)
    }

    /// Find all references to a symbol at a position.
    pub fn find_references(
        &self,
        position: Position,
        include_declaration: bool,
    ) -> ReferenceResult {
        super::references_at(&self.response, &self.uri, position, include_declaration)
    }

    /// Highlight the symbol at a position throughout the document.
    pub fn document_highlight(&self, position: Position) -> Vec<DocumentHighlight> {
        super::document_highlight(&self.response, position)
    }

    /// Plan a rename of the symbol at a position.
    pub fn rename(&self, position: Position, new_name: &str) -> WorkspaceEdit {
        super::rename(&self.response, &self.uri, position, new_name)
    }

    /// The range a rename at this position would replace.
    pub fn prepare_rename(&self, position: Position) -> Option<Range> {
        super::prepare_rename(&self.response, position)
    }

    /// Get completions after typing `trigger`; `position` is the cursor after it.
    pub fn completions(&self, position: Position, trigger: char) -> Vec<CompletionItem> {
        let Some(offset) = self.line_index.offset(&self.text, position) else {
            return Vec::new();
        };
        super::completions(&self.response, trigger, position, &self.text, offset)
    }

    // ==================== Document features ====================

    /// Get all outline symbols in the document.
    pub fn document_symbols(&self) -> Vec<SymbolInfo> {
        super::document_symbols(&self.response, &self.uri)
    }

    /// Get parser diagnostics for the document.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        super::diagnostics(&self.response)
    }

    // ==================== Accessors ====================

    pub fn uri(&self) -> &Arc<str> {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The engine's model of the document.
    pub fn response(&self) -> &Response {
        &self.response
    }
}
