//! Negation windows
//!
//! A negation word flips the polarity of lexicon hits that follow it closely. With the
//! default window of three, a token at index `i` is negated when a negation token sits at
//! any index `p` with `i - 3 <= p < i`. The window is measured in raw token positions, not
//! in lexicon hits, so a single "not" can flip several nearby words.

use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::tokenizer::Token;

/// Default number of tokens a negation reaches forward
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Negation positions of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationSpan {
    positions: Vec<usize>,
    window: usize,
}

impl NegationSpan {
    /// Collect the positions of every negation token in `tokens`
    pub fn resolve(tokens: &[Token], lexicon: &Lexicon, window: usize) -> Self {
        let positions = tokens
            .iter()
            .filter(|token| lexicon.is_negation(token.as_str()))
            .map(|token| token.position)
            .collect();
        NegationSpan { positions, window }
    }

    /// Whether the token at `index` falls inside some negation's window
    pub fn is_negated(&self, index: usize) -> bool {
        self.positions
            .iter()
            .any(|&p| p < index && index - p <= self.window)
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::tokenizer::tokenize;

    fn span(text: &str) -> NegationSpan {
        NegationSpan::resolve(&tokenize(text), &Lexicon::standard(), DEFAULT_NEGATION_WINDOW)
    }

    #[test]
    fn test_finds_negation_positions() {
        assert_eq!(span("i do not think so, never").positions(), &[2, 5]);
        assert!(span("all good here").is_empty());
    }

    #[test]
    fn test_window_reaches_three_tokens() {
        // not(0) a(1) b(2) c(3) d(4)
        let negations = span("not a b c d");
        assert!(!negations.is_negated(0));
        assert!(negations.is_negated(1));
        assert!(negations.is_negated(2));
        assert!(negations.is_negated(3));
        assert!(!negations.is_negated(4));
    }

    #[test]
    fn test_negation_does_not_reach_backwards() {
        let negations = span("good not");
        assert!(!negations.is_negated(0));
    }

    #[test]
    fn test_custom_window() {
        let negations = NegationSpan::resolve(&tokenize("never a b"), &Lexicon::standard(), 1);
        assert!(negations.is_negated(1));
        assert!(!negations.is_negated(2));
    }

    #[test]
    fn test_zero_window_disables_negation() {
        let negations = NegationSpan::resolve(&tokenize("not good"), &Lexicon::standard(), 0);
        assert!(!negations.is_negated(1));
    }
}
