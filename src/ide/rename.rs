//! Rename planning.
//!
//! Every occurrence of the symbol is rewritten, definitions included, and the new
//! name is wrapped in the exact syntax of each occurrence's kind so the edited
//! document still parses to the same kinds of nodes.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::classify::{Occurrence, occurrence_at};
use super::references::find_references;
use crate::base::{Position, Range};
use crate::model::Response;

/// A single text replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Edits grouped by document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceEdit {
    pub changes: FxHashMap<Arc<str>, Vec<TextEdit>>,
}

impl WorkspaceEdit {
    /// No documents touched.
    pub fn is_empty(&self) -> bool {
        self.changes.values().all(Vec::is_empty)
    }

    /// Edits for one document, in document order.
    pub fn edits_for(&self, uri: &str) -> &[TextEdit] {
        self.changes.get(uri).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The replacement for one occurrence, in the syntax of its kind.
fn rename_edit(occurrence: &Occurrence<'_>, new_name: &str) -> TextEdit {
    TextEdit {
        range: occurrence.range(),
        new_text: occurrence.kind.render(new_name),
    }
}

/// Plan the edits renaming `occurrence` and all its siblings to `new_name`.
///
/// Only `uri` is touched; the symbol lives in a single document.
pub fn plan_rename(
    response: &Response,
    uri: &Arc<str>,
    occurrence: &Occurrence<'_>,
    new_name: &str,
) -> WorkspaceEdit {
    let edits: Vec<TextEdit> = find_references(response, occurrence, true)
        .iter()
        .map(|found| rename_edit(found, new_name))
        .collect();

    debug!(
        uri = %uri,
        old = %occurrence.key,
        new = new_name,
        edits = edits.len(),
        "planned rename"
    );

    let mut changes = FxHashMap::default();
    changes.insert(uri.clone(), edits);
    WorkspaceEdit { changes }
}

/// Rename the symbol at an editor position.
///
/// Nothing renameable at the position yields an empty edit.
pub fn rename(
    response: &Response,
    uri: &Arc<str>,
    position: Position,
    new_name: &str,
) -> WorkspaceEdit {
    let (line, character) = position.to_one_based();
    match occurrence_at(response, line, character) {
        Some(occurrence) => plan_rename(response, uri, &occurrence, new_name),
        None => WorkspaceEdit::default(),
    }
}

/// The range that a rename at `position` would replace, if any.
pub fn prepare_rename(response: &Response, position: Position) -> Option<Range> {
    let (line, character) = position.to_one_based();
    occurrence_at(response, line, character).map(|o| o.range())
}
