//! Hover information implementation.
//!
//! Statements and arguments render as a fenced Argdown snippet: the entity with its
//! canonical text, followed by one indented line per relation. Tags render as a
//! list of everything carrying the tag.

use std::fmt::Write as _;

use super::classify::{Occurrence, SymbolFamily, occurrence_at};
use crate::base::{Position, Range};
use crate::model::{Argument, EntityRef, EquivalenceClass, Relation, Response};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Range of the hovered occurrence.
    pub range: Range,
}

/// Build hover content for a classified occurrence.
///
/// Returns `None` when the occurrence names an entity the model does not know.
pub fn hover(response: &Response, occurrence: &Occurrence<'_>) -> Option<HoverResult> {
    let contents = match occurrence.family() {
        SymbolFamily::Statement => statement_markdown(response.statement(&occurrence.key)?),
        SymbolFamily::Argument => argument_markdown(response.argument(&occurrence.key)?),
        SymbolFamily::Tag => tag_markdown(response, &occurrence.key),
    };
    Some(HoverResult {
        contents,
        range: occurrence.range(),
    })
}

/// Get hover information for an editor position.
pub fn hover_at(response: &Response, position: Position) -> Option<HoverResult> {
    let (line, character) = position.to_one_based();
    let occurrence = occurrence_at(response, line, character)?;
    hover(response, &occurrence)
}

fn statement_markdown(class: &EquivalenceClass) -> String {
    let heading = match class.canonical_text() {
        Some(text) => format!("[{}]: {text}", class.title),
        None => format!("[{}]", class.title),
    };
    let this = EntityRef::statement(class.title.clone());
    argdown_block(&heading, &this, &class.relations)
}

fn argument_markdown(argument: &Argument) -> String {
    let heading = match argument.canonical_description() {
        Some(description) => format!("<{}>: {}", argument.title, description.text),
        None => format!("<{}>", argument.title),
    };
    let this = EntityRef::argument(argument.title.clone());
    argdown_block(&heading, &this, &argument.relations)
}

fn argdown_block(heading: &str, this: &EntityRef, relations: &[Relation]) -> String {
    let mut content = String::new();
    content.push_str("```argdown\n");
    content.push_str(heading);
    content.push('\n');
    for relation in relations {
        content.push_str(&relation_line(this, relation));
        content.push('\n');
    }
    content.push_str("```");
    content
}

/// One relation as seen from `this`, e.g. `  <+ <A1>` or `  -> [S2]`.
fn relation_line(this: &EntityRef, relation: &Relation) -> String {
    let viewed_from_target = relation.to == *this;
    let partner = if viewed_from_target {
        &relation.from
    } else {
        &relation.to
    };
    format!(
        "  {} {}",
        relation.relation_type.directed_symbol(viewed_from_target),
        partner.to_argdown()
    )
}

fn tag_markdown(response: &Response, tag: &str) -> String {
    let mut content = format!("**#({tag})**\n\n");
    for class in response.statements.values().filter(|c| c.has_tag(tag)) {
        let _ = writeln!(content, " * [{}]", class.title);
    }
    for argument in response.arguments.values().filter(|a| a.has_tag(tag)) {
        let _ = writeln!(content, " * <{}>", argument.title);
    }
    content
}
