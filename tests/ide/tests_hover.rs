//! Hover tests for the IDE layer.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::RELATIONS_DOC;
use argdown::ide::{hover, hover_at, occurrence_at};
use argdown::{Position, Range};

// =============================================================================
// HOVER - STATEMENTS AND ARGUMENTS
// =============================================================================

#[test]
fn test_hover_statement_reference_shows_canonical_text_once() {
    let analysis = analysis_from_source(RELATIONS_DOC);

    // The `[S1]` below `<A1>`.
    let result = analysis.hover(Position::new(3, 5)).expect("hover on [S1]");

    assert_eq!(result.contents.matches("[S1]: Text A.").count(), 1);
    assert_eq!(result.contents, "```argdown\n[S1]: Text A.\n  <- <A1>\n```");
    assert_eq!(result.range, Range::from_coords(3, 4, 3, 8));
}

#[test]
fn test_hover_statement_definition_with_incoming_support() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.hover(Position::new(5, 1)).expect("hover on [S2]:");
    assert_eq!(result.contents, "```argdown\n[S2]: Other.\n  <+ <A1>\n```");
}

#[test]
fn test_hover_argument_lists_outgoing_relations() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.hover(Position::new(2, 1)).expect("hover on <A1>:");
    assert_eq!(
        result.contents,
        "```argdown\n<A1>: Desc.\n  -> [S1]\n  +> [S2]\n```"
    );
}

#[test]
fn test_hover_definition_and_reference_agree() {
    let response = relations_response();
    let from_reference = hover_at(&response, Position::new(6, 5)).unwrap();
    let from_definition = hover_at(&response, Position::new(2, 2)).unwrap();
    assert_eq!(from_reference.contents, from_definition.contents);
    assert_ne!(from_reference.range, from_definition.range);
}

// =============================================================================
// HOVER - TAGS
// =============================================================================

#[test]
fn test_hover_tag_lists_tagged_entities() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.hover(Position::new(5, 15)).expect("hover on tag");
    assert_eq!(result.contents, "**#(important)**\n\n * [S2]\n");
    assert_eq!(result.range, Range::from_coords(5, 13, 5, 23));
}

// =============================================================================
// HOVER - NOTHING TO SHOW
// =============================================================================

#[test]
fn test_hover_on_blank_line() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.hover(Position::new(1, 0)).is_none());
}

#[test]
fn test_hover_on_plain_text() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    // "Text A." is a plain token; nothing on its chain is a symbol.
    assert!(analysis.hover(Position::new(0, 8)).is_none());
}

#[test]
fn test_hover_past_end_of_document() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.hover(Position::new(40, 0)).is_none());
}

#[test]
fn test_hover_from_classified_occurrence() {
    let response = relations_response();
    let occurrence = occurrence_at(&response, 7, 6).expect("<A1> on line 7");
    let result = hover(&response, &occurrence).unwrap();
    assert!(result.contents.starts_with("```argdown\n<A1>: Desc."));
}
