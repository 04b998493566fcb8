//! Find references and document highlight.
//!
//! The CST walk is authoritative here, not the semantic maps: mentions and plain
//! references never enter the model's tables, but they are nodes in the tree.

use std::sync::Arc;

use super::classify::{Occurrence, OccurrenceKind, classify, occurrence_at};
use crate::base::{Location, Position, Range};
use crate::model::Response;
use crate::syntax::walk;

/// Result of a find-references request.
#[derive(Clone, Debug)]
pub struct ReferenceResult {
    /// All references found, in document order.
    pub references: Vec<Reference>,
    /// Whether definitions were included.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            references: Vec::new(),
            include_declaration: false,
        }
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// The reference locations, for the editor's response.
    pub fn locations(&self) -> Vec<Location> {
        self.references.iter().map(|r| r.location.clone()).collect()
    }
}

/// One occurrence of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub location: Location,
    pub kind: OccurrenceKind,
    /// Whether this is the definition (vs a reference or mention).
    pub is_definition: bool,
}

impl Reference {
    fn from_occurrence(uri: &Arc<str>, occurrence: &Occurrence<'_>) -> Self {
        Self {
            location: Location {
                uri: uri.clone(),
                range: occurrence.range(),
            },
            kind: occurrence.kind,
            is_definition: occurrence.kind.is_definition(),
        }
    }
}

/// Kind of a document highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightKind {
    Read,
    Write,
}

impl HighlightKind {
    /// Convert to LSP document highlight kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            HighlightKind::Read => 2,
            HighlightKind::Write => 3,
        }
    }
}

/// A range to highlight in the current document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentHighlight {
    pub range: Range,
    pub kind: HighlightKind,
}

/// Collect every occurrence of the same symbol as `occurrence`.
///
/// Walks the whole tree in pre-order. Definitions are skipped unless
/// `include_declaration` is set.
pub fn find_references<'a>(
    response: &'a Response,
    occurrence: &Occurrence<'_>,
    include_declaration: bool,
) -> Vec<Occurrence<'a>> {
    let mut found = Vec::new();
    walk(&response.ast, &mut |node| {
        let Some(candidate) = classify(node) else {
            return;
        };
        if candidate.same_symbol(occurrence)
            && (include_declaration || !candidate.kind.is_definition())
        {
            found.push(candidate);
        }
    });
    tracing::trace!(
        key = %occurrence.key,
        family = ?occurrence.family(),
        count = found.len(),
        "collected references"
    );
    found
}

/// Find all references to the symbol at an editor position.
pub fn references_at(
    response: &Response,
    uri: &Arc<str>,
    position: Position,
    include_declaration: bool,
) -> ReferenceResult {
    let (line, character) = position.to_one_based();
    let Some(occurrence) = occurrence_at(response, line, character) else {
        return ReferenceResult::empty();
    };

    let references = find_references(response, &occurrence, include_declaration)
        .iter()
        .map(|found| Reference::from_occurrence(uri, found))
        .collect();

    ReferenceResult {
        references,
        include_declaration,
    }
}

/// Highlight every occurrence of the symbol at `position` in this document.
pub fn document_highlight(response: &Response, position: Position) -> Vec<DocumentHighlight> {
    let (line, character) = position.to_one_based();
    let Some(occurrence) = occurrence_at(response, line, character) else {
        return Vec::new();
    };

    find_references(response, &occurrence, true)
        .iter()
        .map(|found| DocumentHighlight {
            range: found.range(),
            kind: if found.kind.is_definition() {
                HighlightKind::Write
            } else {
                HighlightKind::Read
            },
        })
        .collect()
}
