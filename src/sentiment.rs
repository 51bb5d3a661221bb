//! Sentence scoring pipeline
//!
//!     The pipeline runs once per sentence and reads nothing but the caller's text and an
//!     immutable [Lexicon](lexicon::Lexicon). Stages, in order:
//!
//!     1. Emoji scan over the raw characters. The first known emoji decides the label and
//!        nothing else runs. See [emoji].
//!     2. Tokenization into lowercase word tokens. See [tokenizer].
//!     3. Negation resolution and tallying of lexicon hits. See [negation] and [tally].
//!     4. Exclamation boost, applied when the raw text contains `!`. See [tally].
//!     5. Short-utterance override for sequences of at most three tokens. See [short].
//!     6. Threshold decision on the tally difference. See [decision].
//!
//!     [Scorer](scorer::Scorer) wires the stages together; [batch] scores many sentences at
//!     once while preserving input order.

pub mod batch;
pub mod decision;
pub mod emoji;
pub mod label;
pub mod lexicon;
pub mod negation;
pub mod scorer;
pub mod short;
pub mod tally;
pub mod tokenizer;

pub use batch::{BatchResponse, ScoredSentence};
pub use label::{Mood, SentimentLabel};
pub use lexicon::Lexicon;
pub use scorer::{score, DecisionStage, Scorer, ScoringParams, ScoringParamsError, Verdict};
pub use tally::ScoreTally;
pub use tokenizer::{tokenize, Token};
