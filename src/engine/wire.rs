//! JSON wire format of engine responses.
//!
//! The engine's tree is duck-typed: every node is an object whose meaning depends on
//! which optional fields are present. Decoding happens into loose wire structs first
//! and is then closed into [`NodeKind`] variants.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::IgnoredAny;
use smol_str::SmolStr;

use super::error::EngineError;
use crate::base::Span;
use crate::model::{Argument, EquivalenceClass, ParserError, Response};
use crate::syntax::{Node, NodeKind, Role, SymbolToken};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    ast: WireNode,
    #[serde(default)]
    statements: IndexMap<SmolStr, EquivalenceClass>,
    #[serde(default)]
    arguments: IndexMap<SmolStr, Argument>,
    #[serde(default)]
    tags_dictionary: Option<IndexMap<SmolStr, IgnoredAny>>,
    #[serde(default)]
    parser_errors: Vec<ParserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTokenType {
    token_name: SmolStr,
}

#[derive(Debug, Deserialize)]
struct WireTitled {
    title: SmolStr,
}

#[derive(Debug, Deserialize)]
struct WireSection {
    id: SmolStr,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNode {
    #[serde(default)]
    token_type: Option<WireTokenType>,
    #[serde(default)]
    name: Option<SmolStr>,
    #[serde(default)]
    start_line: u32,
    #[serde(default)]
    start_column: u32,
    #[serde(default)]
    end_line: u32,
    #[serde(default)]
    end_column: u32,
    #[serde(default)]
    image: Option<SmolStr>,
    #[serde(default)]
    title: Option<SmolStr>,
    #[serde(default)]
    tag: Option<SmolStr>,
    #[serde(default)]
    text: Option<SmolStr>,
    #[serde(default)]
    statement: Option<WireTitled>,
    #[serde(default)]
    argument: Option<WireTitled>,
    #[serde(default)]
    section: Option<WireSection>,
    #[serde(default)]
    children: Vec<WireNode>,
}

impl WireNode {
    fn span(&self) -> Span {
        Span::new(
            self.start_line,
            self.start_column,
            self.end_line,
            self.end_column,
        )
    }

    fn into_node(self) -> Result<Node, EngineError> {
        let span = self.span();
        let kind = match self.token_type.as_ref().map(|t| t.token_name.as_str()) {
            Some(token_name) => token_kind(token_name, &self),
            None => rule_kind(&self)?,
        };
        let children = self
            .children
            .into_iter()
            .map(WireNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node {
            kind,
            span,
            children,
        })
    }
}

fn symbol_token(role: Role, node: &WireNode, owner: Option<&WireTitled>) -> SymbolToken {
    SymbolToken {
        role,
        title: node.title.clone(),
        owner: owner.map(|o| o.title.clone()),
    }
}

fn token_kind(token_name: &str, node: &WireNode) -> NodeKind {
    let statement = node.statement.as_ref();
    let argument = node.argument.as_ref();
    match token_name {
        "StatementReference" => NodeKind::Statement(symbol_token(Role::Reference, node, statement)),
        "StatementDefinition" => {
            NodeKind::Statement(symbol_token(Role::Definition, node, statement))
        }
        "StatementMention" => NodeKind::Statement(symbol_token(Role::Mention, node, statement)),
        "ArgumentReference" => NodeKind::Argument(symbol_token(Role::Reference, node, argument)),
        "ArgumentDefinition" => NodeKind::Argument(symbol_token(Role::Definition, node, argument)),
        "ArgumentMention" => NodeKind::Argument(symbol_token(Role::Mention, node, argument)),
        "Tag" => NodeKind::Tag {
            tag: node.tag.clone(),
        },
        "Indent" => NodeKind::Indent,
        "Dedent" => NodeKind::Dedent,
        other => NodeKind::Token {
            name: SmolStr::new(other),
            image: node.image.clone().unwrap_or_default(),
        },
    }
}

fn rule_kind(node: &WireNode) -> Result<NodeKind, EngineError> {
    let Some(name) = node.name.as_ref() else {
        return Err(EngineError::invalid_node(
            "rule",
            format!(
                "node at {}:{} has neither a token type nor a rule name",
                node.start_line, node.start_column
            ),
        ));
    };
    let kind = match (name.as_str(), node.argument.as_ref()) {
        ("heading", _) => NodeKind::Heading {
            text: node.text.clone().unwrap_or_default(),
            section: node.section.as_ref().map(|s| s.id.clone()),
        },
        ("argument", Some(argument)) => NodeKind::ArgumentBlock {
            argument: argument.title.clone(),
        },
        _ => NodeKind::Rule(name.clone()),
    };
    Ok(kind)
}

/// Decode an engine response from its JSON form.
pub fn decode_response(json: &str) -> Result<Response, EngineError> {
    into_response(serde_json::from_str(json)?)
}

/// Decode an engine response from raw output bytes, rejecting invalid UTF-8.
pub fn decode_response_slice(bytes: &[u8]) -> Result<Response, EngineError> {
    into_response(serde_json::from_slice(bytes)?)
}

fn into_response(wire: WireResponse) -> Result<Response, EngineError> {
    Ok(Response {
        ast: wire.ast.into_node()?,
        statements: wire.statements,
        arguments: wire.arguments,
        tags: wire
            .tags_dictionary
            .map(|dictionary| dictionary.into_keys().collect()),
        parser_errors: wire.parser_errors,
    })
}
