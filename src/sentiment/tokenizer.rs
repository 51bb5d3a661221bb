//! Word tokenization
//!
//! This module turns a sentence into the lowercase word tokens the lexicon is matched
//! against. A word is a maximal run of Unicode letters, Unicode digits or apostrophes, so
//! "don't" stays one token and "n't" only appears when it is written on its own.
//!
//! Everything else (whitespace, punctuation, emoji) separates words and is dropped. The
//! emoji scan and the exclamation check look at the raw sentence, not at these tokens.

use logos::Logos;

/// Raw lexemes recognized by the logos lexer. Unmatched input surfaces as lexer errors,
/// which the tokenizer skips as separators.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    #[regex(r"[\p{L}\p{N}']+")]
    Word,
}

/// A lowercase word together with its ordinal position in the sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Tokenize a sentence into lowercase word tokens.
///
/// Never fails; empty or whitespace-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    let mut lexer = Lexeme::lexer(&lowered);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(Lexeme::Word) = result {
            tokens.push(Token {
                text: lexer.slice().to_string(),
                position: tokens.len(),
            });
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(words("I LOVE this"), vec!["i", "love", "this"]);
    }

    #[test]
    fn test_positions_are_ordinal() {
        let tokens = tokenize("well, it's  fine!");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(tokens[1].as_str(), "it's");
    }

    #[test]
    fn test_punctuation_and_emoji_separate_words() {
        assert_eq!(words("great!!!bad...ok"), vec!["great", "bad", "ok"]);
        assert_eq!(words("love😊hate"), vec!["love", "hate"]);
    }

    #[test]
    fn test_apostrophes_stay_inside_words() {
        assert_eq!(words("don't n't 'quoted'"), vec!["don't", "n't", "'quoted'"]);
    }

    #[test]
    fn test_digits_are_words() {
        assert_eq!(words("123 go2"), vec!["123", "go2"]);
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(words("Café ÜBER naïve"), vec!["café", "über", "naïve"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize("  \t\n  "), vec![]);
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(tokenize("?! ... 🙂"), vec![]);
    }
}
