//! Word and emoji tables used by the scoring pipeline
//!
//!     A [Lexicon] bundles every table the pipeline consults: the positive and negative word
//!     sets, the negation words, the emoji glyphs and the short-utterance words. It is built
//!     once and only ever read afterwards.
//!
//!     The standard lexicon lives in a process-wide [Lazy] and is handed out as an
//!     `Arc<Lexicon>`. A service that wants additional words builds its own lexicon once at
//!     startup with [Lexicon::extended] and shares that instead.
//!
//!     Emoji are single code points. The frowning face is stored as bare U+2639, so it also
//!     matches when written with a trailing variation selector ("☹️", U+2639 U+FE0F). A table
//!     keyed on the two-code-point sequence would never match a per-character scan, and such
//!     text would fall through to the word stages instead of scoring sad.

use crate::sentiment::label::Mood;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const POSITIVE_WORDS: &[&str] = &[
    "love", "loved", "loving", "like", "liked", "enjoy", "enjoyed", "enjoying", "great", "good",
    "wonderful", "amazing", "excellent", "awesome", "best", "fantastic", "pleased", "delighted",
    "positive", "happy", "joy", "joyful", "cute", "brilliant", "favorite", "favourite", "yay",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "hated", "hating", "dislike", "disliked", "angry", "mad", "terrible", "awful",
    "horrible", "worst", "sad", "sadness", "disappointed", "disappointing", "poor", "sucks",
    "sucked", "annoyed", "upset", "unhappy", "tragic", "ruined", "problem", "problems",
];

const NEGATION_WORDS: &[&str] = &["not", "no", "never", "n't", "hardly", "rarely", "neither"];

const HAPPY_EMOJI: &[char] = &['🙂', '😊', '😃', '😄', '😀', '😁', '😍', '😺', '👍'];

const SAD_EMOJI: &[char] = &['☹', '😢', '😞', '😟', '😿', '👎'];

const SHORT_UTTERANCES: &[(&str, Mood)] = &[
    ("yes", Mood::Happy),
    ("yeah", Mood::Happy),
    ("yup", Mood::Happy),
    ("yess", Mood::Happy),
    ("yesss", Mood::Happy),
    ("no", Mood::Sad),
    ("nah", Mood::Sad),
    ("nope", Mood::Sad),
];

static STANDARD: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::build_standard()));

/// Immutable lookup tables for one scoring configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negations: HashSet<String>,
    emoji: HashMap<char, Mood>,
    short_utterances: HashMap<String, Mood>,
}

impl Lexicon {
    /// The shared standard lexicon
    pub fn standard() -> Arc<Lexicon> {
        Arc::clone(&STANDARD)
    }

    fn build_standard() -> Self {
        let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<HashSet<_>>();

        let emoji = HAPPY_EMOJI
            .iter()
            .map(|&c| (c, Mood::Happy))
            .chain(SAD_EMOJI.iter().map(|&c| (c, Mood::Sad)))
            .collect();

        let short_utterances = SHORT_UTTERANCES
            .iter()
            .map(|&(word, mood)| (word.to_string(), mood))
            .collect();

        Lexicon {
            positive: words(POSITIVE_WORDS),
            negative: words(NEGATIVE_WORDS),
            negations: words(NEGATION_WORDS),
            emoji,
            short_utterances,
        }
    }

    /// Copy of this lexicon with extra positive and negative words merged in.
    ///
    /// Words are lowercased and trimmed; blanks are ignored. A word may end up in both sets,
    /// in which case it counts towards both tallies.
    pub fn extended<P, N>(&self, extra_positive: P, extra_negative: N) -> Lexicon
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut lexicon = self.clone();
        lexicon.positive.extend(normalized(extra_positive));
        lexicon.negative.extend(normalized(extra_negative));
        lexicon
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Mood of a single emoji glyph, if it is one we know
    pub fn emoji_mood(&self, glyph: char) -> Option<Mood> {
        self.emoji.get(&glyph).copied()
    }

    /// Mood of a whole-word short utterance such as "yes" or "nope"
    pub fn short_utterance_mood(&self, word: &str) -> Option<Mood> {
        self.short_utterances.get(word).copied()
    }

    pub fn positive_words(&self) -> Vec<&str> {
        sorted(&self.positive)
    }

    pub fn negative_words(&self) -> Vec<&str> {
        sorted(&self.negative)
    }

    pub fn negation_words(&self) -> Vec<&str> {
        sorted(&self.negations)
    }

    /// Emoji glyphs with their moods, ordered by code point
    pub fn emoji_table(&self) -> Vec<(char, Mood)> {
        let mut table: Vec<_> = self.emoji.iter().map(|(&c, &m)| (c, m)).collect();
        table.sort_by_key(|(c, _)| *c);
        table
    }

    /// Short utterances with their moods, ordered alphabetically
    pub fn short_utterance_table(&self) -> Vec<(&str, Mood)> {
        let mut table: Vec<_> = self
            .short_utterances
            .iter()
            .map(|(w, &m)| (w.as_str(), m))
            .collect();
        table.sort_by(|a, b| a.0.cmp(b.0));
        table
    }
}

fn normalized<I>(words: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut words: Vec<&str> = set.iter().map(String::as_str).collect();
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_shared() {
        let a = Lexicon::standard();
        let b = Lexicon::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_standard_word_sets() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_positive("favourite"));
        assert!(lexicon.is_negative("problems"));
        assert!(!lexicon.is_positive("hate"));
        assert!(!lexicon.is_negative("love"));
        assert_eq!(lexicon.positive_words().len(), 27);
        assert_eq!(lexicon.negative_words().len(), 25);
    }

    #[test]
    fn test_negation_words() {
        let lexicon = Lexicon::standard();
        for word in ["not", "no", "never", "n't", "hardly", "rarely", "neither"] {
            assert!(lexicon.is_negation(word), "{} should negate", word);
        }
        assert!(!lexicon.is_negation("nor"));
    }

    #[test]
    fn test_emoji_moods() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.emoji_mood('😊'), Some(Mood::Happy));
        assert_eq!(lexicon.emoji_mood('👍'), Some(Mood::Happy));
        assert_eq!(lexicon.emoji_mood('☹'), Some(Mood::Sad));
        assert_eq!(lexicon.emoji_mood('👎'), Some(Mood::Sad));
        assert_eq!(lexicon.emoji_mood('a'), None);
        assert_eq!(lexicon.emoji_table().len(), 15);
    }

    #[test]
    fn test_short_utterances() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.short_utterance_mood("yesss"), Some(Mood::Happy));
        assert_eq!(lexicon.short_utterance_mood("nah"), Some(Mood::Sad));
        assert_eq!(lexicon.short_utterance_mood("maybe"), None);
        let words: Vec<&str> = lexicon
            .short_utterance_table()
            .into_iter()
            .map(|(w, _)| w)
            .collect();
        assert_eq!(
            words,
            vec!["nah", "no", "nope", "yeah", "yes", "yess", "yesss", "yup"]
        );
    }

    #[test]
    fn test_extended_normalizes_and_leaves_standard_alone() {
        let standard = Lexicon::standard();
        let extended = standard.extended(["  Stellar ", ""], vec!["MEH".to_string()]);

        assert!(extended.is_positive("stellar"));
        assert!(extended.is_negative("meh"));
        assert!(extended.is_positive("love"));
        assert!(!standard.is_positive("stellar"));
        assert_eq!(
            extended.positive_words().len(),
            standard.positive_words().len() + 1
        );
    }
}
