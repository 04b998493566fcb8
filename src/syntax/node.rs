//! CST node types.
//!
//! The language engine hands us a loosely typed tree. We close it into a single
//! [`Node`] shape with a [`NodeKind`] discriminator, so every consumer matches over
//! a fixed set of variants instead of probing optional fields.

use smol_str::SmolStr;

use crate::base::Span;

/// How a symbol token relates to the entity it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `[Title]` / `<Title>`
    Reference,
    /// `[Title]:` / `<Title>:`
    Definition,
    /// `@[Title]` / `@<Title>`
    Mention,
}

/// Payload shared by statement and argument tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolToken {
    pub role: Role,
    /// The title as written at this occurrence.
    pub title: Option<SmolStr>,
    /// Title of the owning semantic entity, if the engine attached one.
    pub owner: Option<SmolStr>,
}

impl SymbolToken {
    pub fn new(role: Role, title: impl Into<SmolStr>) -> Self {
        Self {
            role,
            title: Some(title.into()),
            owner: None,
        }
    }
}

/// The closed set of node shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Non-terminal grouping node, named after its grammar rule.
    Rule(SmolStr),
    /// A terminal without symbol semantics.
    Token { name: SmolStr, image: SmolStr },
    /// Structural pseudo-token; its span is not meaningful.
    Indent,
    /// Structural pseudo-token; its span is not meaningful.
    Dedent,
    Statement(SymbolToken),
    Argument(SymbolToken),
    Tag { tag: Option<SmolStr> },
    /// A heading. The first child is the heading marker token.
    Heading {
        text: SmolStr,
        section: Option<SmolStr>,
    },
    /// The `argument` rule wrapping a premise-conclusion structure.
    ArgumentBlock { argument: SmolStr },
}

/// A node of the concrete syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub fn rule(name: impl Into<SmolStr>, span: Span, children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Rule(name.into()),
            span,
            children,
        }
    }

    pub fn token(name: impl Into<SmolStr>, image: impl Into<SmolStr>, span: Span) -> Self {
        Self::new(
            NodeKind::Token {
                name: name.into(),
                image: image.into(),
            },
            span,
        )
    }

    pub fn statement(role: Role, title: impl Into<SmolStr>, span: Span) -> Self {
        Self::new(NodeKind::Statement(SymbolToken::new(role, title)), span)
    }

    pub fn argument(role: Role, title: impl Into<SmolStr>, span: Span) -> Self {
        Self::new(NodeKind::Argument(SymbolToken::new(role, title)), span)
    }

    pub fn tag(tag: impl Into<SmolStr>, span: Span) -> Self {
        Self::new(
            NodeKind::Tag {
                tag: Some(tag.into()),
            },
            span,
        )
    }

    pub fn indent(span: Span) -> Self {
        Self::new(NodeKind::Indent, span)
    }

    pub fn dedent(span: Span) -> Self {
        Self::new(NodeKind::Dedent, span)
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Indentation markers carry degenerate spans and must never take part in
    /// position containment.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, NodeKind::Indent | NodeKind::Dedent)
    }

    /// The engine's token name for terminals; `None` for grouping nodes.
    pub fn token_name(&self) -> Option<&str> {
        let name = match &self.kind {
            NodeKind::Rule(_) | NodeKind::Heading { .. } | NodeKind::ArgumentBlock { .. } => {
                return None;
            }
            NodeKind::Token { name, .. } => name.as_str(),
            NodeKind::Indent => "Indent",
            NodeKind::Dedent => "Dedent",
            NodeKind::Statement(token) => match token.role {
                Role::Reference => "StatementReference",
                Role::Definition => "StatementDefinition",
                Role::Mention => "StatementMention",
            },
            NodeKind::Argument(token) => match token.role {
                Role::Reference => "ArgumentReference",
                Role::Definition => "ArgumentDefinition",
                Role::Mention => "ArgumentMention",
            },
            NodeKind::Tag { .. } => "Tag",
        };
        Some(name)
    }

    /// The source image of a plain token.
    pub fn image(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Token { image, .. } => Some(image.as_str()),
            _ => None,
        }
    }
}
