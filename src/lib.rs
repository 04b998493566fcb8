//! # argdown-base
//!
//! Position-indexed queries over Argdown documents: hover, go-to-definition,
//! find-references, rename, completion and outline.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (locate, classify, hover, goto-def, rename, ...)
//!   ↓
//! engine    → Language engine bridge, configuration, JSON wire format
//!   ↓
//! model     → Statements, arguments, relations, tags
//!   ↓
//! syntax    → Closed CST node type and tree walks
//!   ↓
//! base      → Primitives (Span, Position/Range, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → model → engine → ide)
// ============================================================================

/// Foundation types: Span, Position, Range, LineIndex
pub mod base;

/// Syntax: CST nodes produced by the language engine
pub mod syntax;

/// Semantic model: equivalence classes, arguments, relations
pub mod model;

/// Language engine: requests, configuration, subprocess bridge
pub mod engine;

/// IDE features: hover, goto-definition, find-references, rename, completion
pub mod ide;

// Re-export foundation types
pub use base::{LineIndex, Location, Position, Range, Span, TextRange, TextSize};
pub use engine::{EngineConfig, EngineError, EngineRequest, LanguageEngine};
pub use model::Response;
