//! Relations between statements and arguments.

use serde::Deserialize;
use smol_str::SmolStr;

/// The kind of a dialectical or logical relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Support,
    Attack,
    Undercut,
    Entails,
    Contrary,
    Contradictory,
}

impl RelationType {
    /// The bare Argdown relation symbol, without direction markers.
    pub fn symbol(&self) -> &'static str {
        match self {
            RelationType::Support | RelationType::Entails => "+",
            RelationType::Attack | RelationType::Contrary => "-",
            RelationType::Undercut => "_",
            RelationType::Contradictory => "><",
        }
    }

    /// Symbol as seen from one end of the relation.
    ///
    /// From the target's side the arrow points back (`<+`), from the source's side it
    /// points forward (`+>`). Contradiction is symmetric and has no direction.
    pub fn directed_symbol(&self, viewed_from_target: bool) -> String {
        let symbol = self.symbol();
        match self {
            RelationType::Contradictory => symbol.to_string(),
            _ if viewed_from_target => format!("<{symbol}"),
            _ => format!("{symbol}>"),
        }
    }
}

/// A reference from a relation to one of its ends.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityRef {
    Statement { title: SmolStr },
    Argument { title: SmolStr },
}

impl EntityRef {
    pub fn statement(title: impl Into<SmolStr>) -> Self {
        EntityRef::Statement {
            title: title.into(),
        }
    }

    pub fn argument(title: impl Into<SmolStr>) -> Self {
        EntityRef::Argument {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            EntityRef::Statement { title } | EntityRef::Argument { title } => title,
        }
    }

    /// The entity in Argdown reference syntax: `[title]` or `<title>`.
    pub fn to_argdown(&self) -> String {
        match self {
            EntityRef::Statement { title } => format!("[{title}]"),
            EntityRef::Argument { title } => format!("<{title}>"),
        }
    }
}

/// A directed relation between two entities.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Relation {
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub from: EntityRef,
    pub to: EntityRef,
}

impl Relation {
    pub fn new(relation_type: RelationType, from: EntityRef, to: EntityRef) -> Self {
        Self {
            relation_type,
            from,
            to,
        }
    }
}
