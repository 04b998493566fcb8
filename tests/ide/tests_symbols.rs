//! Document symbol tests for the IDE layer.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::RELATIONS_DOC;
use argdown::ide::DocumentSymbolKind;
use argdown::{Position, Range};

#[test]
fn test_document_symbols_list_definitions_in_order() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let symbols = analysis.document_symbols();

    let names: Vec<_> = symbols.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, vec!["[S1]", "<A1>", "[S2]"]);

    let kinds: Vec<_> = symbols.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DocumentSymbolKind::StatementDefinition,
            DocumentSymbolKind::ArgumentDefinition,
            DocumentSymbolKind::StatementDefinition,
        ]
    );
}

#[test]
fn test_document_symbols_carry_location() {
    let analysis = analysis_from_source(RELATIONS_DOC);
    let symbols = analysis.document_symbols();
    let a1 = symbols.iter().find(|s| s.id == "A1").expect("A1 in outline");

    assert_eq!(a1.location.uri.as_ref(), TEST_URI);
    assert_eq!(a1.location.range, Range::from_coords(2, 0, 2, 5));
    assert!(a1.location.range.contains(Position::new(2, 1)));
}
