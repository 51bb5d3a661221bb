//! Score accumulation and exclamation boosting
//!
//!     Every token is checked against both word sets. A hit adds 1.0 to its own side of the
//!     tally, or to the opposite side when the token sits inside a negation window, so "not
//!     love" counts as negative rather than cancelling out. A token listed in both sets
//!     contributes to both sides.
//!
//!     After tallying, a sentence containing `!` is boosted once: the leading side is
//!     multiplied by the boost factor, and a tie (including 0/0) leans positive by a flat
//!     amount.

use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::negation::NegationSpan;
use crate::sentiment::tokenizer::Token;
use serde::{Deserialize, Serialize};

/// Weight of a single lexicon hit
const HIT_WEIGHT: f64 = 1.0;

/// Positive and negative weight accumulated for one sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub positive: f64,
    pub negative: f64,
}

impl ScoreTally {
    pub fn new(positive: f64, negative: f64) -> Self {
        ScoreTally { positive, negative }
    }

    /// Tally lexicon hits, flipping those covered by a negation
    pub fn accumulate(tokens: &[Token], lexicon: &Lexicon, negations: &NegationSpan) -> Self {
        let mut tally = ScoreTally::default();

        for token in tokens {
            let word = token.as_str();
            let positive_hit = lexicon.is_positive(word);
            let negative_hit = lexicon.is_negative(word);
            if !positive_hit && !negative_hit {
                continue;
            }

            let negated = negations.is_negated(token.position);
            if positive_hit {
                tally.add(negated, false);
            }
            if negative_hit {
                tally.add(negated, true);
            }
        }

        tally
    }

    fn add(&mut self, negated: bool, negative_hit: bool) {
        if negated ^ negative_hit {
            self.negative += HIT_WEIGHT;
        } else {
            self.positive += HIT_WEIGHT;
        }
    }

    /// Apply the exclamation boost in place
    pub fn boost(&mut self, factor: f64, tie_lean: f64) {
        if self.positive > self.negative {
            self.positive *= factor;
        } else if self.negative > self.positive {
            self.negative *= factor;
        } else {
            self.positive += tie_lean;
        }
    }

    /// `positive - negative`
    pub fn difference(&self) -> f64 {
        self.positive - self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.positive == 0.0 && self.negative == 0.0
    }
}
