//! Emoji short-circuit
//!
//! Scans the raw sentence one character at a time. The first character the lexicon knows as
//! an emoji decides the sentence on its own, before any word is looked at.
//!
//! Because the scan is per character, "☹️" (U+2639 U+FE0F) is decided by its U+2639 base and
//! scores sad even when the words around it are positive.

use crate::sentiment::label::Mood;
use crate::sentiment::lexicon::Lexicon;

/// Mood of the first known emoji in `text`, in text order
pub fn scan(text: &str, lexicon: &Lexicon) -> Option<Mood> {
    text.chars().find_map(|c| lexicon.emoji_mood(c))
}
