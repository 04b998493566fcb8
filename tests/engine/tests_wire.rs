//! Decoding tests over a complete engine response.

use crate::helpers::source_fixtures::{BROKEN_JSON, RELATIONS_JSON};
use argdown::engine::decode_response;
use argdown::model::{EntityRef, RelationType};
use argdown::syntax::{NodeKind, Role, preorder};

#[test]
fn test_fixture_tree_decodes_symbol_tokens() {
    let response = decode_response(RELATIONS_JSON).unwrap();
    let symbols: Vec<_> = preorder(&response.ast)
        .into_iter()
        .filter_map(|node| match &node.kind {
            NodeKind::Statement(token) | NodeKind::Argument(token) => Some(token.role),
            _ => None,
        })
        .collect();
    assert_eq!(
        symbols,
        vec![
            Role::Definition,
            Role::Definition,
            Role::Reference,
            Role::Definition,
            Role::Reference,
        ]
    );
}

#[test]
fn test_fixture_model_keeps_engine_order() {
    let response = decode_response(RELATIONS_JSON).unwrap();
    let titles: Vec<_> = response.statements.keys().map(|k| k.as_str()).collect();
    assert_eq!(titles, vec!["S1", "S2"]);

    let a1 = response.argument("A1").unwrap();
    assert_eq!(a1.relations.len(), 2);
    assert_eq!(a1.relations[1].relation_type, RelationType::Support);
    assert_eq!(a1.relations[1].to, EntityRef::statement("S2"));
    assert!(a1.pcs.is_none());
}

#[test]
fn test_broken_fixture_decodes_errors() {
    let response = decode_response(BROKEN_JSON).unwrap();
    assert!(response.ast.children.is_empty());
    assert_eq!(response.parser_errors.len(), 1);
    assert!(response.tags.is_none());
}
