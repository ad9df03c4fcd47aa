//! Accepting or rejecting a reply from the remote feedback service.
//!
//! No requests are made here. Callers hand over whatever the service
//! returned, or the error they hit reaching it, and [`resolve`] decides
//! whether to show that reply or the offline analysis instead. The two are
//! never merged.

use log::{debug, warn};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;
use crate::items::{flatten, to_items, FeedbackItem, ItemKind};
use crate::{analyze_with, FeedbackResponse, RuleSet};

static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Structured reply from the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteFeedback {
    pub grammar: Vec<String>,
    pub vocabulary: Vec<String>,
    pub structure: Vec<String>,
    pub content: Vec<String>,
    pub praise: Vec<String>,
}

impl RemoteFeedback {
    pub fn is_empty(&self) -> bool {
        self.grammar.is_empty()
            && self.vocabulary.is_empty()
            && self.structure.is_empty()
            && self.content.is_empty()
            && self.praise.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "feedback", rename_all = "lowercase")]
pub enum RemoteReply {
    /// A single natural-language feedback blob.
    Text(String),
    Structured(RemoteFeedback),
}

/// Where the feedback shown to the writer came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum FeedbackSource {
    Remote { reply: RemoteReply },
    Offline { response: FeedbackResponse },
}

impl FeedbackSource {
    pub fn is_offline(&self) -> bool {
        matches!(self, FeedbackSource::Offline { .. })
    }

    pub fn items(&self) -> Vec<FeedbackItem> {
        match self {
            FeedbackSource::Offline { response } => to_items(response),
            FeedbackSource::Remote {
                reply: RemoteReply::Text(blob),
            } => vec![FeedbackItem::from_finding(ItemKind::Expression, blob)],
            FeedbackSource::Remote {
                reply: RemoteReply::Structured(feedback),
            } => {
                let groups = [
                    (ItemKind::Grammar, &feedback.grammar),
                    (ItemKind::Vocabulary, &feedback.vocabulary),
                    (ItemKind::Structure, &feedback.structure),
                    (ItemKind::Expression, &feedback.content),
                    (ItemKind::Expression, &feedback.praise),
                ];
                flatten(groups)
            }
        }
    }
}

/// Pull the outermost JSON object out of `raw` and decode it.
pub fn parse_structured(raw: &str) -> Result<RemoteFeedback, RemoteError> {
    let object = JSON_OBJECT_RE.find(raw).ok_or(RemoteError::NoJson)?;
    let feedback: RemoteFeedback = serde_json::from_str(object.as_str())?;
    if feedback.is_empty() {
        return Err(RemoteError::Empty);
    }
    Ok(feedback)
}

pub fn parse_text(raw: &str) -> Result<String, RemoteError> {
    let blob = raw.trim();
    if blob.is_empty() {
        return Err(RemoteError::Empty);
    }
    Ok(blob.to_string())
}

/// Use the remote reply when there is one, the offline engine otherwise.
pub fn resolve(text: &str, reply: Result<RemoteReply, RemoteError>) -> FeedbackSource {
    resolve_with(text, reply, RuleSet::standard(), &mut rand::rng())
}

pub fn resolve_with<R: Rng>(
    text: &str,
    reply: Result<RemoteReply, RemoteError>,
    rules: &RuleSet,
    rng: &mut R,
) -> FeedbackSource {
    match reply {
        Ok(reply) => {
            debug!("using remote feedback");
            FeedbackSource::Remote { reply }
        }
        Err(e) => {
            warn!("{e}; falling back to offline feedback");
            FeedbackSource::Offline {
                response: analyze_with(text, rules, rng),
            }
        }
    }
}
