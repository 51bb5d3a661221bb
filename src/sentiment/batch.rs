//! Batch scoring
//!
//!     A batch request carries an ordered list of items under `sentences`. The request is
//!     validated here, once, before anything is scored: the field must be present and must be
//!     a list. Items that are not strings are rendered to text with [render_item], which never
//!     fails, so every item produces exactly one result.
//!
//!     Sentences are independent, so a batch is scored on the rayon pool. Indexed parallel
//!     iterators collect in input order: result `i` always belongs to item `i`.

use crate::sentiment::label::SentimentLabel;
use crate::sentiment::scorer::Scorer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Name of the request field holding the sentences
pub const SENTENCES_FIELD: &str = "sentences";

/// Reasons a batch request is rejected before scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchRequestError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing 'sentences' field")]
    MissingSentences,
    #[error("'sentences' must be a list")]
    NotAList,
}

/// One scored item, echoing the text that was actually scored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: String,
    pub sentiment: SentimentLabel,
}

/// Response body of a batch request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ScoredSentence>,
}

impl BatchResponse {
    pub fn labels(&self) -> Vec<SentimentLabel> {
        self.results.iter().map(|r| r.sentiment).collect()
    }
}

/// Extract the `sentences` list from a request body.
///
/// A `null` field counts as missing.
pub fn parse_request(body: Value) -> Result<Vec<Value>, BatchRequestError> {
    let Value::Object(mut fields) = body else {
        return Err(BatchRequestError::NotAnObject);
    };

    match fields.remove(SENTENCES_FIELD) {
        None | Some(Value::Null) => Err(BatchRequestError::MissingSentences),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(BatchRequestError::NotAList),
    }
}

/// Text form of a batch item: strings as-is, anything else as compact JSON
pub fn render_item(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Score already-rendered sentences, preserving order
pub fn score_sentences(scorer: &Scorer, sentences: Vec<String>) -> Vec<ScoredSentence> {
    sentences
        .into_par_iter()
        .map(|sentence| {
            let sentiment = scorer.score(&sentence);
            ScoredSentence {
                sentence,
                sentiment,
            }
        })
        .collect()
}

/// Render and score raw batch items, preserving order
pub fn score_items(scorer: &Scorer, items: &[Value]) -> BatchResponse {
    let sentences = items.iter().map(render_item).collect();
    BatchResponse {
        results: score_sentences(scorer, sentences),
    }
}
