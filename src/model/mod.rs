//! Semantic model: Statements, arguments, relations and tags.
//!
//! Built by the language engine alongside the CST. Statements are grouped into
//! equivalence classes by title; one class may be defined at several places in a
//! document. Arguments may likewise carry several descriptions.

mod argument;
mod relation;
mod response;
mod statement;

pub use argument::{Argument, Description, Pcs};
pub use relation::{EntityRef, Relation, RelationType};
pub use response::{ParserError, Response};
pub use statement::{EquivalenceClass, Member};
