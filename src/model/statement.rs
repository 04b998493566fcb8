//! Statements and their equivalence classes.

use serde::Deserialize;
use smol_str::SmolStr;

use super::relation::Relation;
use crate::base::Span;

/// One textual definition of a statement.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub span: Span,
    #[serde(default)]
    pub is_canonical: bool,
}

impl Member {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
            is_canonical: false,
        }
    }

    pub fn canonical(mut self) -> Self {
        self.is_canonical = true;
        self
    }
}

/// All occurrences of one statement identity, unified by title.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquivalenceClass {
    pub title: SmolStr,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
}

impl EquivalenceClass {
    pub fn new(title: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            members: Vec::new(),
            relations: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// The member flagged canonical, else the last member that has text.
    pub fn canonical_member(&self) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.is_canonical)
            .or_else(|| self.members.iter().rev().find(|m| !m.text.is_empty()))
    }

    pub fn canonical_text(&self) -> Option<&str> {
        self.canonical_member().map(|m| m.text.as_str())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
