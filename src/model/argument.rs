//! Arguments, their descriptions and premise-conclusion structures.

use serde::Deserialize;
use smol_str::SmolStr;

use super::relation::Relation;
use super::statement::Member;
use crate::base::Span;

/// Descriptions share the shape of statement members.
pub type Description = Member;

/// The premise-conclusion structure of an argument.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pcs {
    #[serde(flatten)]
    pub span: Span,
    /// Titles of the statements in the structure, premises first.
    #[serde(default)]
    pub statements: Vec<SmolStr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub title: SmolStr,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub pcs: Option<Pcs>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
}

impl Argument {
    pub fn new(title: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            descriptions: Vec::new(),
            pcs: None,
            relations: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// The description flagged canonical, else the last one that has text.
    pub fn canonical_description(&self) -> Option<&Description> {
        self.descriptions
            .iter()
            .find(|d| d.is_canonical)
            .or_else(|| self.descriptions.iter().rev().find(|d| !d.text.is_empty()))
    }

    /// The PCS span, if the argument has a non-empty structure.
    pub fn pcs_span(&self) -> Option<Span> {
        self.pcs
            .as_ref()
            .filter(|pcs| !pcs.statements.is_empty())
            .map(|pcs| pcs.span)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
