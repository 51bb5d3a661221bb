//! Short-utterance override
//!
//! Replies like "yes", "nope" or "yeah sure" carry little lexicon signal, so sequences of at
//! most a few tokens are looked up word by word in the short-utterance table instead. The
//! first token (in sentence order) with an entry decides the label, ahead of the tally.

use crate::sentiment::label::Mood;
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::tokenizer::Token;

/// Default maximum length of a short utterance, in tokens
pub const DEFAULT_SHORT_UTTERANCE_MAX_TOKENS: usize = 3;

/// Mood of the first short-utterance word, if the sequence is short enough
pub fn resolve(tokens: &[Token], lexicon: &Lexicon, max_tokens: usize) -> Option<Mood> {
    if tokens.is_empty() || tokens.len() > max_tokens {
        return None;
    }

    tokens
        .iter()
        .find_map(|token| lexicon.short_utterance_mood(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::tokenizer::tokenize;

    fn short(text: &str) -> Option<Mood> {
        resolve(
            &tokenize(text),
            &Lexicon::standard(),
            DEFAULT_SHORT_UTTERANCE_MAX_TOKENS,
        )
    }

    #[test]
    fn test_single_words() {
        assert_eq!(short("yes"), Some(Mood::Happy));
        assert_eq!(short("Nope."), Some(Mood::Sad));
        assert_eq!(short("maybe"), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(short("yes but no"), Some(Mood::Happy));
        assert_eq!(short("nah, yeah"), Some(Mood::Sad));
    }

    #[test]
    fn test_too_long_for_override() {
        assert_eq!(short("yes I think so"), None);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(short(""), None);
        assert_eq!(short("?!"), None);
    }
}
