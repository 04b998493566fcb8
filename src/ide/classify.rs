//! Node classifier: Which symbol, if any, a CST node denotes.

use smol_str::SmolStr;

use super::locate::locate;
use crate::base::Range;
use crate::model::Response;
use crate::syntax::{Node, NodeKind, Role, SymbolToken};

/// The symbol families that can be referenced, renamed and hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolFamily {
    Statement,
    Argument,
    Tag,
}

/// The exact kind of a symbol occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccurrenceKind {
    StatementReference,
    StatementDefinition,
    StatementMention,
    ArgumentReference,
    ArgumentDefinition,
    ArgumentMention,
    Tag,
}

impl OccurrenceKind {
    pub fn family(&self) -> SymbolFamily {
        match self {
            OccurrenceKind::StatementReference
            | OccurrenceKind::StatementDefinition
            | OccurrenceKind::StatementMention => SymbolFamily::Statement,
            OccurrenceKind::ArgumentReference
            | OccurrenceKind::ArgumentDefinition
            | OccurrenceKind::ArgumentMention => SymbolFamily::Argument,
            OccurrenceKind::Tag => SymbolFamily::Tag,
        }
    }

    /// Whether this is the family's canonical declaration syntax.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            OccurrenceKind::StatementDefinition | OccurrenceKind::ArgumentDefinition
        )
    }

    /// The occurrence written in Argdown syntax with `name` as its key.
    pub fn render(&self, name: &str) -> String {
        match self {
            OccurrenceKind::ArgumentReference => format!("<{name}>"),
            OccurrenceKind::ArgumentDefinition => format!("<{name}>:"),
            OccurrenceKind::ArgumentMention => format!("@<{name}>"),
            OccurrenceKind::StatementReference => format!("[{name}]"),
            OccurrenceKind::StatementDefinition => format!("[{name}]:"),
            OccurrenceKind::StatementMention => format!("@[{name}]"),
            OccurrenceKind::Tag => format!("#({name})"),
        }
    }

    fn statement(role: Role) -> Self {
        match role {
            Role::Reference => OccurrenceKind::StatementReference,
            Role::Definition => OccurrenceKind::StatementDefinition,
            Role::Mention => OccurrenceKind::StatementMention,
        }
    }

    fn argument(role: Role) -> Self {
        match role {
            Role::Reference => OccurrenceKind::ArgumentReference,
            Role::Definition => OccurrenceKind::ArgumentDefinition,
            Role::Mention => OccurrenceKind::ArgumentMention,
        }
    }
}

/// A classified symbol occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub kind: OccurrenceKind,
    /// Statement/argument title or tag name.
    pub key: SmolStr,
    pub node: &'a Node,
}

impl Occurrence<'_> {
    pub fn family(&self) -> SymbolFamily {
        self.kind.family()
    }

    pub fn range(&self) -> Range {
        self.node.span.to_range()
    }

    /// Whether `other` names the same symbol, regardless of its exact kind.
    pub fn same_symbol(&self, other: &Occurrence<'_>) -> bool {
        self.family() == other.family() && self.key == other.key
    }
}

fn symbol_key(token: &SymbolToken) -> Option<SmolStr> {
    token.title.clone().or_else(|| token.owner.clone())
}

/// Classify a node as a symbol occurrence.
///
/// Returns `None` for grouping nodes, plain tokens, structural markers, and symbol
/// tokens that carry no key.
pub fn classify(node: &Node) -> Option<Occurrence<'_>> {
    let (kind, key) = match &node.kind {
        NodeKind::Statement(token) => (OccurrenceKind::statement(token.role), symbol_key(token)?),
        NodeKind::Argument(token) => (OccurrenceKind::argument(token.role), symbol_key(token)?),
        NodeKind::Tag { tag } => (OccurrenceKind::Tag, tag.clone()?),
        NodeKind::Rule(_)
        | NodeKind::Token { .. }
        | NodeKind::Indent
        | NodeKind::Dedent
        | NodeKind::Heading { .. }
        | NodeKind::ArgumentBlock { .. } => return None,
    };
    Some(Occurrence { kind, key, node })
}

/// The innermost symbol occurrence enclosing a 1-based position.
pub fn occurrence_at(response: &Response, line: u32, character: u32) -> Option<Occurrence<'_>> {
    locate(&response.ast.children, line, character)
        .into_iter()
        .rev()
        .find_map(classify)
}
