//! Go-to-definition implementation.
//!
//! Definitions come from the semantic model, not the tree: a statement is defined
//! by every member of its equivalence class, an argument by its descriptions and
//! its premise-conclusion structure.

use std::sync::Arc;

use super::classify::{Occurrence, SymbolFamily, occurrence_at};
use crate::base::{Location, Position, Span};
use crate::model::Response;

/// Result of a go-to-definition request.
#[derive(Clone, Debug)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.targets.iter().map(|t| t.location.clone()).collect()
    }
}

/// What a definition target points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// A textual definition unified into a statement's equivalence class.
    StatementMember,
    /// One of an argument's descriptions.
    ArgumentDescription,
    /// An argument's premise-conclusion structure.
    Pcs,
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub location: Location,
    pub kind: TargetKind,
}

impl GotoTarget {
    fn new(uri: &Arc<str>, span: Span, kind: TargetKind) -> Self {
        Self {
            location: Location {
                uri: uri.clone(),
                range: span.to_range(),
            },
            kind,
        }
    }
}

/// Resolve the defining locations of an occurrence.
///
/// For arguments the PCS target comes last, after all descriptions, whatever its
/// position in the document.
pub fn find_definitions(
    response: &Response,
    uri: &Arc<str>,
    occurrence: &Occurrence<'_>,
) -> Vec<GotoTarget> {
    match occurrence.family() {
        SymbolFamily::Statement => response
            .statement(&occurrence.key)
            .map(|class| {
                class
                    .members
                    .iter()
                    .map(|m| GotoTarget::new(uri, m.span, TargetKind::StatementMember))
                    .collect()
            })
            .unwrap_or_default(),
        SymbolFamily::Argument => {
            let Some(argument) = response.argument(&occurrence.key) else {
                return Vec::new();
            };
            let mut targets: Vec<_> = argument
                .descriptions
                .iter()
                .map(|d| GotoTarget::new(uri, d.span, TargetKind::ArgumentDescription))
                .collect();
            if let Some(span) = argument.pcs_span() {
                targets.push(GotoTarget::new(uri, span, TargetKind::Pcs));
            }
            targets
        }
        // Tags have no single canonical definition.
        SymbolFamily::Tag => Vec::new(),
    }
}

/// Find the definitions of the symbol at an editor position.
pub fn goto_definition(response: &Response, uri: &Arc<str>, position: Position) -> GotoResult {
    let (line, character) = position.to_one_based();
    match occurrence_at(response, line, character) {
        Some(occurrence) => GotoResult {
            targets: find_definitions(response, uri, &occurrence),
        },
        None => GotoResult::empty(),
    }
}
