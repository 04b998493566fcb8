//! The result of one language-engine pass.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use smol_str::SmolStr;

use super::argument::Argument;
use super::statement::EquivalenceClass;
use crate::base::Span;
use crate::syntax::Node;

/// A syntax error reported by the engine's parser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ParserError {
    pub message: String,
    /// Span of the offending token.
    pub token: Span,
}

/// An immutable snapshot of one analysis pass.
///
/// Entity maps keep the engine's insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub ast: Node,
    pub statements: IndexMap<SmolStr, EquivalenceClass>,
    pub arguments: IndexMap<SmolStr, Argument>,
    /// Tag dictionary; absent when the engine did not run its tag stage.
    pub tags: Option<IndexSet<SmolStr>>,
    pub parser_errors: Vec<ParserError>,
}

impl Response {
    pub fn new(ast: Node) -> Self {
        Self {
            ast,
            statements: IndexMap::new(),
            arguments: IndexMap::new(),
            tags: None,
            parser_errors: Vec::new(),
        }
    }

    pub fn with_statement(mut self, class: EquivalenceClass) -> Self {
        self.statements.insert(class.title.clone(), class);
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.insert(argument.title.clone(), argument);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SmolStr>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_parser_error(mut self, error: ParserError) -> Self {
        self.parser_errors.push(error);
        self
    }

    pub fn statement(&self, title: &str) -> Option<&EquivalenceClass> {
        self.statements.get(title)
    }

    pub fn argument(&self, title: &str) -> Option<&Argument> {
        self.arguments.get(title)
    }
}
