//! Find references tests for the IDE layer.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::RELATIONS_DOC;
use argdown::ide::{HighlightKind, OccurrenceKind};
use argdown::{Position, Range};

// =============================================================================
// FIND REFERENCES
// =============================================================================

#[test]
fn test_find_references_include_declaration() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.find_references(Position::new(0, 1), true);

    assert_eq!(result.len(), 2);
    assert_eq!(result.references[0].kind, OccurrenceKind::StatementDefinition);
    assert_eq!(result.references[1].kind, OccurrenceKind::StatementReference);
    assert_eq!(
        result.locations()[1].range,
        Range::from_coords(3, 4, 3, 8)
    );
}

#[test]
fn test_find_references_exclude_declaration() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.find_references(Position::new(3, 5), false);

    assert_eq!(result.len(), 1);
    assert!(!result.include_declaration);
    assert!(!result.references[0].is_definition);
}

#[test]
fn test_find_references_from_either_end() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let from_definition = analysis.find_references(Position::new(2, 1), true);
    let from_reference = analysis.find_references(Position::new(6, 5), true);

    assert_eq!(from_definition.locations(), from_reference.locations());
    assert_eq!(from_definition.len(), 2);
}

#[test]
fn test_find_references_tag() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.find_references(Position::new(5, 20), true);
    assert_eq!(result.len(), 1);
    assert_eq!(result.references[0].kind, OccurrenceKind::Tag);
}

#[test]
fn test_find_references_nothing_at_position() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.find_references(Position::new(1, 0), true).is_empty());
}

// =============================================================================
// DOCUMENT HIGHLIGHT
// =============================================================================

#[test]
fn test_document_highlight_marks_definition_as_write() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let highlights = analysis.document_highlight(Position::new(6, 6));

    assert_eq!(highlights.len(), 2);
    assert_eq!(highlights[0].kind, HighlightKind::Write);
    assert_eq!(highlights[0].range, Range::from_coords(2, 0, 2, 5));
    assert_eq!(highlights[1].kind, HighlightKind::Read);
    assert_eq!(highlights[1].kind.to_lsp(), 2);
}
