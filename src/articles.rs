//! Corrección del artículo indefinido "a" -> "an"

use crate::tokenizer::{Tokenizer, Word};

/// Letras iniciales que exigen "an"
const AN_INITIALS: &[char] = &['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U', 'h', 'H'];

/// Corrector de artículos
#[derive(Debug, Default, Clone)]
pub struct ArticleCorrector {
    tokenizer: Tokenizer,
}

impl ArticleCorrector {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Reescribe "a"/"A" como "an"/"An" delante de vocal o "h".
    ///
    /// Una sola pasada de izquierda a derecha; la puntuación pegada sigue
    /// dentro de su palabra y las palabras se unen con un único espacio.
    pub fn correct(&self, text: &str) -> String {
        let words = self.tokenizer.words(text);
        let mut output: Vec<String> = Vec::with_capacity(words.len());
        let mut rewritten = 0usize;

        for (i, &token) in words.iter().enumerate() {
            let mut word = token.to_string();
            if words.get(i + 1).is_some_and(|&next| Self::needs_an(token, next)) {
                word.push('n');
                rewritten += 1;
            }
            output.push(word);
        }

        tracing::debug!(rewritten, "artículos corregidos");
        self.tokenizer.reconstruct(&output)
    }

    /// ¿Debe `token` ("a"/"A" sin puntuación) convertirse en "an" delante de `next`?
    pub fn needs_an(token: &str, next: &str) -> bool {
        let word = Word::new(token);
        if word.has_trailing_punctuation() || !matches!(word.core, "a" | "A") {
            return false;
        }

        Word::new(next)
            .first_char()
            .is_some_and(|ch| AN_INITIALS.contains(&ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct(text: &str) -> String {
        ArticleCorrector::new().correct(text)
    }

    #[test]
    fn test_vowel() {
        assert_eq!(correct("a apple"), "an apple");
        assert_eq!(correct("a Elephant"), "an Elephant");
    }

    #[test]
    fn test_consonant_unchanged() {
        assert_eq!(correct("a banana"), "a banana");
    }

    #[test]
    fn test_h_and_capital() {
        assert_eq!(correct("A hour"), "An hour");
        assert_eq!(correct("a Honest man"), "an Honest man");
    }

    #[test]
    fn test_last_word_untouched() {
        assert_eq!(correct("give me a"), "give me a");
    }

    #[test]
    fn test_glued_punctuation_survives() {
        assert_eq!(correct("It was a hour."), "It was an hour.");
        assert_eq!(correct("a, apple"), "a, apple");
        assert_eq!(correct("Hi, a owl!"), "Hi, an owl!");
    }

    #[test]
    fn test_only_exact_article() {
        assert_eq!(correct("an apple"), "an apple");
        assert_eq!(correct("ab apple"), "ab apple");
        assert_eq!(correct("a 'apple'"), "a 'apple'");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(correct("a a apple"), "an an apple");
    }

    #[test]
    fn test_needs_an() {
        assert!(ArticleCorrector::needs_an("a", "umbrella"));
        assert!(!ArticleCorrector::needs_an("a", "?"));
        assert!(!ArticleCorrector::needs_an("a.", "egg"));
    }
}
