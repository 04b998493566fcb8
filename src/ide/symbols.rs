//! Symbol listing for the document outline.

use std::sync::Arc;

use smol_str::SmolStr;

use super::classify::{OccurrenceKind, classify};
use crate::base::Location;
use crate::model::Response;
use crate::syntax::{Node, NodeKind, walk};

/// What an outline entry stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentSymbolKind {
    Pcs,
    ArgumentDefinition,
    StatementDefinition,
    Heading,
}

impl DocumentSymbolKind {
    /// Convert to LSP symbol kind number. Every outline entry is shown as a variable.
    pub fn to_lsp(&self) -> u32 {
        13
    }
}

/// An entry of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Display name, in Argdown syntax.
    pub name: Arc<str>,
    pub kind: DocumentSymbolKind,
    /// Title of the entity, or the section id for headings.
    pub id: SmolStr,
    pub location: Location,
}

/// Get all outline symbols of a document, in document order.
pub fn document_symbols(response: &Response, uri: &Arc<str>) -> Vec<SymbolInfo> {
    let mut symbols = Vec::new();
    walk(&response.ast, &mut |node| {
        if let Some((name, kind, id)) = describe(node) {
            symbols.push(SymbolInfo {
                name: name.into(),
                kind,
                id,
                location: Location {
                    uri: uri.clone(),
                    range: node.span.to_range(),
                },
            });
        }
    });
    symbols
}

fn describe(node: &Node) -> Option<(String, DocumentSymbolKind, SmolStr)> {
    match &node.kind {
        NodeKind::ArgumentBlock { argument } => Some((
            format!("PCS <{argument}>"),
            DocumentSymbolKind::Pcs,
            argument.clone(),
        )),
        NodeKind::Heading { text, section } => {
            let marker = node.children.first().and_then(Node::image).unwrap_or_default();
            let id = section.clone().unwrap_or_else(|| text.clone());
            Some((format!("{marker}{text}"), DocumentSymbolKind::Heading, id))
        }
        NodeKind::Statement(_) | NodeKind::Argument(_) => {
            let occurrence = classify(node)?;
            let key = occurrence.key;
            match occurrence.kind {
                OccurrenceKind::StatementDefinition => Some((
                    format!("[{key}]"),
                    DocumentSymbolKind::StatementDefinition,
                    key,
                )),
                OccurrenceKind::ArgumentDefinition => Some((
                    format!("<{key}>"),
                    DocumentSymbolKind::ArgumentDefinition,
                    key,
                )),
                _ => None,
            }
        }
        _ => None,
    }
}
