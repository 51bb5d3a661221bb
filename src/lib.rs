//! # moodlex
//!
//! Lexicon-based sentiment tagging for short sentences.
//!
//! Every sentence maps to exactly one of three labels (`happy`, `sad`, `neutral`) through a
//! fixed, explainable pipeline: emoji short-circuit, lexicon matching with a negation window,
//! exclamation boosting, short-utterance overrides and a final threshold. See the
//! [sentiment module](sentiment) for the pipeline, [server] for the batch HTTP service and
//! [config] for the layered configuration.

pub mod config;
pub mod error;
pub mod sentiment;
pub mod server;

pub use error::{MoodlexError, Result};
pub use sentiment::{score, Scorer, SentimentLabel};
