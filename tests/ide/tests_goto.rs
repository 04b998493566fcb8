//! Go to definition tests for the IDE layer.

use std::sync::Arc;

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::RELATIONS_DOC;
use argdown::ide::{TargetKind, find_definitions, goto_definition, occurrence_at};
use argdown::model::{Argument, Description, Pcs, Response};
use argdown::syntax::{Node, Role};
use argdown::{Position, Range, Span};

#[test]
fn test_goto_statement_from_reference() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.goto_definition(Position::new(3, 5));

    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].kind, TargetKind::StatementMember);
    let location = &result.locations()[0];
    assert_eq!(location.uri.as_ref(), TEST_URI);
    assert_eq!(location.range, Range::from_coords(0, 0, 0, 13));
}

#[test]
fn test_goto_argument_from_reference() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let result = analysis.goto_definition(Position::new(6, 5));

    // A1 has a description but no premise-conclusion structure.
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].kind, TargetKind::ArgumentDescription);
    assert_eq!(
        result.targets[0].location.range,
        Range::from_coords(2, 0, 2, 11)
    );
}

#[test]
fn test_goto_tag_has_no_target() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.goto_definition(Position::new(5, 15)).is_empty());
}

#[test]
fn test_goto_on_blank_line() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    assert!(analysis.goto_definition(Position::new(4, 0)).is_empty());
}

#[test]
fn test_goto_argument_with_pcs_puts_pcs_last() {
    // <A1>: First.          (1)
    // <A1>                  (3)
    // (1) [P]: Premise.     (4)
    // ----                  (5)
    // (2) [C]: Conclusion.  (6)
    // <A1>: Second.         (8)
    let ast = Node::rule(
        "argdown",
        Span::new(1, 1, 8, 13),
        vec![
            Node::argument(Role::Definition, "A1", Span::on_line(1, 1, 5)),
            Node::argument(Role::Reference, "A1", Span::on_line(3, 1, 4)),
            Node::argument(Role::Definition, "A1", Span::on_line(8, 1, 5)),
        ],
    );
    let mut argument = Argument::new("A1");
    argument.descriptions = vec![
        Description::new("First.", Span::on_line(1, 1, 12)),
        Description::new("Second.", Span::on_line(8, 1, 13)),
    ];
    argument.pcs = Some(Pcs {
        span: Span::new(3, 1, 6, 20),
        statements: vec!["P".into(), "C".into()],
    });
    let response = Response::new(ast).with_argument(argument);
    let uri: Arc<str> = Arc::from(TEST_URI);

    let result = goto_definition(&response, &uri, Position::new(2, 1));
    let ranges: Vec<_> = result.targets.iter().map(|t| t.location.range).collect();
    assert_eq!(
        ranges,
        vec![
            Range::from_coords(0, 0, 0, 12),
            Range::from_coords(7, 0, 7, 13),
            Range::from_coords(2, 0, 5, 20),
        ]
    );
    assert_eq!(result.targets[2].kind, TargetKind::Pcs);
}

#[test]
fn test_empty_pcs_is_not_a_target() {
    let ast = Node::rule(
        "argdown",
        Span::on_line(1, 1, 5),
        vec![Node::argument(Role::Reference, "A1", Span::on_line(1, 1, 4))],
    );
    let mut argument = Argument::new("A1");
    argument.pcs = Some(Pcs {
        span: Span::new(3, 1, 6, 20),
        statements: Vec::new(),
    });
    let response = Response::new(ast).with_argument(argument);
    let uri: Arc<str> = Arc::from(TEST_URI);

    let occurrence = occurrence_at(&response, 1, 2).unwrap();
    assert!(find_definitions(&response, &uri, &occurrence).is_empty());
}
