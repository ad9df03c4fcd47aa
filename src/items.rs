//! Flat, display-ready feedback items.

use serde::{Deserialize, Serialize};

use crate::FeedbackResponse;

/// Display tag for a feedback item. Praise is shown as `expression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Grammar,
    Expression,
    Structure,
    Vocabulary,
}

/// Character offsets of a span in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub original_text: String,
    pub suggestion: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

impl FeedbackItem {
    /// An item whose suggestion and explanation are the same finding text.
    pub fn from_finding(kind: ItemKind, finding: &str) -> Self {
        Self {
            kind,
            original_text: String::new(),
            suggestion: finding.to_string(),
            explanation: finding.to_string(),
            position: None,
        }
    }

    /// Replace the first occurrence of `original_text` in `content` with the
    /// suggestion. `None` when the item has no span or the span is absent.
    pub fn apply(&self, content: &str) -> Option<String> {
        if self.original_text.is_empty() || self.suggestion.is_empty() {
            return None;
        }
        if !content.contains(&self.original_text) {
            return None;
        }
        Some(content.replacen(&self.original_text, &self.suggestion, 1))
    }
}

/// Flatten a response into items, grouped grammar, vocabulary, structure,
/// then praise.
pub fn to_items(response: &FeedbackResponse) -> Vec<FeedbackItem> {
    let groups = [
        (ItemKind::Grammar, &response.grammar),
        (ItemKind::Vocabulary, &response.vocabulary),
        (ItemKind::Structure, &response.structure),
        (ItemKind::Expression, &response.praise),
    ];

    flatten(groups)
}

pub(crate) fn flatten<'a>(
    groups: impl IntoIterator<Item = (ItemKind, &'a Vec<String>)>,
) -> Vec<FeedbackItem> {
    groups
        .into_iter()
        .flat_map(|(kind, findings)| {
            findings
                .iter()
                .map(move |f| FeedbackItem::from_finding(kind, f))
        })
        .collect()
}
