//! Scorer: the full per-sentence pipeline
//!
//!     [Scorer] owns a shared [Lexicon] and the numeric [ScoringParams], and runs the stages
//!     in their fixed order:
//!
//!         emoji scan -> tokenize -> negations -> tally -> boost -> short override -> threshold
//!
//!     The emoji scan and the short-utterance override may end the pipeline early. Every call
//!     is pure: the same text always yields the same [Verdict].
//!
//!     [score] is a convenience over a process-wide scorer built from the standard lexicon
//!     and the default parameters.

use crate::sentiment::decision::{self, DEFAULT_DECISION_THRESHOLD};
use crate::sentiment::emoji;
use crate::sentiment::label::SentimentLabel;
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::negation::{NegationSpan, DEFAULT_NEGATION_WINDOW};
use crate::sentiment::short::{self, DEFAULT_SHORT_UTTERANCE_MAX_TOKENS};
use crate::sentiment::tally::ScoreTally;
use crate::sentiment::tokenizer::tokenize;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

static STANDARD_SCORER: Lazy<Scorer> = Lazy::new(Scorer::standard);

/// Score `text` with the standard lexicon and default parameters
pub fn score(text: &str) -> SentimentLabel {
    STANDARD_SCORER.score(text)
}

/// Numeric knobs of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// How many tokens after a negation word are flipped
    pub negation_window: usize,
    /// Multiplier applied to the leading side when the text contains `!`
    pub exclamation_boost: f64,
    /// Added to the positive side when the text contains `!` and the tally is tied
    pub exclamation_lean: f64,
    /// Margin one side needs over the other to leave neutral
    pub decision_threshold: f64,
    /// Longest token sequence the short-utterance table applies to
    pub short_utterance_max_tokens: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        ScoringParams {
            negation_window: DEFAULT_NEGATION_WINDOW,
            exclamation_boost: 1.2,
            exclamation_lean: 0.2,
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
            short_utterance_max_tokens: DEFAULT_SHORT_UTTERANCE_MAX_TOKENS,
        }
    }
}

/// Rejected scoring parameter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringParamsError {
    #[error("scoring.{name} must be a finite, non-negative number (got {value})")]
    InvalidReal { name: &'static str, value: f64 },
}

impl ScoringParams {
    /// Check that the real-valued knobs are finite and non-negative.
    ///
    /// The error names the first offending knob.
    pub fn validate(&self) -> Result<(), ScoringParamsError> {
        let reals = [
            ("exclamation_boost", self.exclamation_boost),
            ("exclamation_lean", self.exclamation_lean),
            ("decision_threshold", self.decision_threshold),
        ];
        for (name, value) in reals {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringParamsError::InvalidReal { name, value });
            }
        }
        Ok(())
    }
}

/// Which stage settled the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionStage {
    Emoji,
    ShortUtterance,
    Threshold,
}

impl fmt::Display for DecisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionStage::Emoji => write!(f, "emoji"),
            DecisionStage::ShortUtterance => write!(f, "short-utterance"),
            DecisionStage::Threshold => write!(f, "threshold"),
        }
    }
}

/// Label of one sentence together with how it was reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: SentimentLabel,
    pub stage: DecisionStage,
    /// Tally after boosting; empty when the emoji scan decided
    pub tally: ScoreTally,
    /// Whether the exclamation boost was applied
    pub boosted: bool,
    pub token_count: usize,
}

/// Sentence scorer over a shared, immutable lexicon
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
    params: ScoringParams,
}

impl Scorer {
    pub fn new(lexicon: Arc<Lexicon>, params: ScoringParams) -> Self {
        Scorer { lexicon, params }
    }

    /// Scorer over the standard lexicon with default parameters
    pub fn standard() -> Self {
        Scorer::new(Lexicon::standard(), ScoringParams::default())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    pub fn score(&self, text: &str) -> SentimentLabel {
        self.explain(text).label
    }

    /// Run the pipeline and report the label along with the stage that chose it
    pub fn explain(&self, text: &str) -> Verdict {
        if let Some(mood) = emoji::scan(text, &self.lexicon) {
            tracing::trace!(stage = "emoji", label = %SentimentLabel::from(mood), "decided");
            return Verdict {
                label: mood.into(),
                stage: DecisionStage::Emoji,
                tally: ScoreTally::default(),
                boosted: false,
                token_count: 0,
            };
        }

        let tokens = tokenize(text);
        let negations = NegationSpan::resolve(&tokens, &self.lexicon, self.params.negation_window);
        let mut tally = ScoreTally::accumulate(&tokens, &self.lexicon, &negations);

        let boosted = text.contains('!');
        if boosted {
            tally.boost(self.params.exclamation_boost, self.params.exclamation_lean);
        }

        let (label, stage) = match short::resolve(
            &tokens,
            &self.lexicon,
            self.params.short_utterance_max_tokens,
        ) {
            Some(mood) => (mood.into(), DecisionStage::ShortUtterance),
            None => (
                decision::decide(&tally, self.params.decision_threshold),
                DecisionStage::Threshold,
            ),
        };

        tracing::trace!(
            %stage,
            %label,
            positive = tally.positive,
            negative = tally.negative,
            tokens = tokens.len(),
            "decided"
        );

        Verdict {
            label,
            stage,
            tally,
            boosted,
            token_count: tokens.len(),
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::standard()
    }
}
