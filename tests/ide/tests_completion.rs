//! Code completion tests for the IDE layer.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::RELATIONS_DOC;
use argdown::ide::{CompletionKind, completions};
use argdown::model::{EquivalenceClass, Member, Response};
use argdown::syntax::Node;
use argdown::{Position, Range, Span, TextSize};

fn single_statement_response() -> Response {
    let mut class = EquivalenceClass::new("S1");
    class.members = vec![Member::new("Text A.", Span::on_line(1, 1, 13))];
    Response::new(Node::rule("argdown", Span::on_line(1, 1, 13), vec![])).with_statement(class)
}

// =============================================================================
// TITLE COMPLETION
// =============================================================================

#[test]
fn test_bracket_offers_the_single_statement() {
    let response = single_statement_response();
    let items = completions(&response, '[', Position::new(2, 1), "", TextSize::new(0));

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.label.as_ref(), "[S1]");
    assert_eq!(item.detail.as_deref(), Some("Text A."));
    let edit = item.text_edit.as_ref().expect("text edit");
    assert_eq!(edit.new_text, "[S1]");
    assert_eq!(edit.range, Range::from_coords(2, 0, 2, 2));
}

#[test]
fn test_bracket_offers_statements_in_engine_order() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let items = analysis.completions(Position::new(4, 0), '[');
    let labels: Vec<_> = items.iter().map(|i| i.label.as_ref()).collect();
    assert_eq!(labels, vec!["[S1]", "[S2]"]);
    assert!(items.iter().all(|i| i.kind == CompletionKind::Variable));
}

#[test]
fn test_angle_offers_arguments() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let items = analysis.completions(Position::new(4, 0), '<');
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_ref(), "<A1>");
    assert_eq!(items[0].detail.as_deref(), Some("Desc."));
}

// =============================================================================
// TEXT COMPLETION
// =============================================================================

#[test]
fn test_colon_after_statement_title_offers_its_texts() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    // Cursor right after `[S1]:` on the first line.
    let items = analysis.completions(Position::new(0, 5), ':');

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_ref(), "Text A.");
    assert_eq!(items[0].kind, CompletionKind::Value);
    assert_eq!(items[0].detail.as_deref(), Some("[S1]: Text A."));
    assert_eq!(items[0].insert_text.as_deref(), Some(" Text A.\n"));
}

#[test]
fn test_colon_after_argument_title_offers_its_descriptions() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let items = analysis.completions(Position::new(2, 5), ':');

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].detail.as_deref(), Some("<A1>: Desc."));
}

#[test]
fn test_colon_elsewhere_offers_nothing() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.completions(Position::new(0, 10), ':').is_empty());
}

// =============================================================================
// TAG COMPLETION
// =============================================================================

#[test]
fn test_hash_offers_tags() {
    let response = single_statement_response().with_tags(["important"]);
    let items = completions(&response, '#', Position::new(0, 1), "#", TextSize::new(1));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label.as_ref(), "#(important)");
    assert_eq!(items[0].insert_text.as_deref(), Some("(important)"));
    assert_eq!(items[0].kind.to_lsp(), 14);
}

#[test]
fn test_hash_without_dictionary_offers_nothing() {
    let response = single_statement_response();
    let items = completions(&response, '#', Position::new(0, 1), "#", TextSize::new(1));
    assert!(items.is_empty());
}

#[test]
fn test_completion_on_missing_line_offers_nothing() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.completions(Position::new(30, 0), ':').is_empty());
}
