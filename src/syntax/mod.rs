//! Concrete syntax tree produced by the language engine.
//!
//! The tree is read-only once built; every query walks it by reference.

mod node;
mod walk;

pub use node::{Node, NodeKind, Role, SymbolToken};
pub use walk::{preorder, walk};
