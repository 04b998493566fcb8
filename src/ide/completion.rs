//! Completion suggestions implementation.
//!
//! Completion is driven by the trigger character alone: `[` offers statements,
//! `<` offers arguments, `:` offers the known texts of the title just closed, and
//! `#` offers tags.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use text_size::TextSize;

use super::rename::TextEdit;
use crate::base::{Position, Range};
use crate::model::{Member, Response};

/// A statement title closed immediately before the cursor, e.g. `[S1]`.
static STATEMENT_BEFORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[]+?)\]$").expect("statement lookbehind pattern"));

/// An argument title closed immediately before the cursor, e.g. `<A1>`.
static ARGUMENT_BEFORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<]+?)>$").expect("argument lookbehind pattern"));

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    /// A statement or argument title.
    Variable,
    /// A known statement text or argument description.
    Value,
    /// A tag.
    Keyword,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Variable => 6,
            CompletionKind::Value => 12,
            CompletionKind::Keyword => 14,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Replacement of the text around the trigger.
    pub text_edit: Option<TextEdit>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            insert_text: None,
            text_edit: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Replace `range` with `new_text` on accept.
    pub fn with_text_edit(mut self, range: Range, new_text: impl Into<String>) -> Self {
        self.text_edit = Some(TextEdit {
            range,
            new_text: new_text.into(),
        });
        self
    }

    /// Offer a known text for an already typed title.
    fn known_text(label_title: &str, member: &Member) -> Self {
        Self::new(member.text.as_str(), CompletionKind::Value)
            .with_detail(format!("{label_title}: {}", member.text))
            .with_insert_text(format!(" {}\n", member.text))
    }
}

/// Get completion suggestions for a trigger character.
///
/// # Arguments
/// * `response` - The engine's model of the document
/// * `trigger` - The character that was just typed
/// * `position` - Cursor position (0-indexed)
/// * `text` - The full document text
/// * `offset` - Byte offset of the cursor in `text`
pub fn completions(
    response: &Response,
    trigger: char,
    position: Position,
    text: &str,
    offset: TextSize,
) -> Vec<CompletionItem> {
    let items = match trigger {
        '[' => statement_titles(response, trigger_window(position)),
        '<' => argument_titles(response, trigger_window(position)),
        ':' => known_texts(response, text, offset),
        '#' => tags(response),
        _ => Vec::new(),
    };
    tracing::debug!(%trigger, count = items.len(), "completions");
    items
}

/// The two columns around the trigger character.
fn trigger_window(position: Position) -> Range {
    Range::from_coords(
        position.line,
        position.character.saturating_sub(1),
        position.line,
        position.character + 1,
    )
}

fn statement_titles(response: &Response, window: Range) -> Vec<CompletionItem> {
    response
        .statements
        .values()
        .map(|class| {
            let label = format!("[{}]", class.title);
            let mut item = CompletionItem::new(label.as_str(), CompletionKind::Variable)
                .with_text_edit(window, label);
            if let Some(text) = class.canonical_text() {
                item = item.with_detail(text);
            }
            item
        })
        .collect()
}

fn argument_titles(response: &Response, window: Range) -> Vec<CompletionItem> {
    response
        .arguments
        .values()
        .map(|argument| {
            let label = format!("<{}>", argument.title);
            let mut item = CompletionItem::new(label.as_str(), CompletionKind::Variable)
                .with_text_edit(window, label);
            if let Some(description) = argument.canonical_description() {
                item = item.with_detail(description.text.as_str());
            }
            item
        })
        .collect()
}

/// Texts for the title closed right before the `:` trigger.
fn known_texts(response: &Response, text: &str, offset: TextSize) -> Vec<CompletionItem> {
    let end = usize::from(offset).saturating_sub(1);
    let Some(before) = text.get(..end) else {
        return Vec::new();
    };

    if let Some(captures) = STATEMENT_BEFORE.captures(before) {
        let title = &captures[1];
        let Some(class) = response.statement(title) else {
            return Vec::new();
        };
        let label_title = format!("[{title}]");
        return class
            .members
            .iter()
            .map(|member| CompletionItem::known_text(&label_title, member))
            .collect();
    }

    if let Some(captures) = ARGUMENT_BEFORE.captures(before) {
        let title = &captures[1];
        let Some(argument) = response.argument(title) else {
            return Vec::new();
        };
        let label_title = format!("<{title}>");
        return argument
            .descriptions
            .iter()
            .map(|description| CompletionItem::known_text(&label_title, description))
            .collect();
    }

    Vec::new()
}

fn tags(response: &Response) -> Vec<CompletionItem> {
    let Some(dictionary) = &response.tags else {
        return Vec::new();
    };
    dictionary
        .iter()
        .map(|tag| {
            CompletionItem::new(format!("#({tag})"), CompletionKind::Keyword)
                .with_insert_text(format!("({tag})"))
        })
        .collect()
}
