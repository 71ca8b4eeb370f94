//! Tokenizador de texto
//!
//! Divide el texto en palabras separadas por espacios ASCII. La puntuación
//! pegada a una palabra sigue formando parte de su token.

use std::borrow::Borrow;

/// Signos de puntuación que se pegan a la palabra anterior
pub const SENTENCE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ':', ';'];

/// ¿Es un signo de puntuación de frase?
pub fn is_punctuation(ch: char) -> bool {
    SENTENCE_PUNCTUATION.contains(&ch)
}

/// ¿Es una comilla simple?
pub fn is_quote(ch: char) -> bool {
    ch == '\''
}

/// Vista de un token como (núcleo, puntuación final)
///
/// `"hora."` se ve como núcleo `"hora"` y puntuación `"."`; un token formado
/// solo por puntuación tiene núcleo vacío.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub core: &'a str,
    pub trailing: &'a str,
}

impl<'a> Word<'a> {
    pub fn new(token: &'a str) -> Self {
        let core = token.trim_end_matches(is_punctuation);
        Self {
            core,
            trailing: &token[core.len()..],
        }
    }

    pub fn first_char(&self) -> Option<char> {
        self.core.chars().next()
    }

    pub fn has_trailing_punctuation(&self) -> bool {
        !self.trailing.is_empty()
    }
}

/// Tokenizador de texto
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Palabras separadas por espacios ASCII, en orden de lectura
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_ascii_whitespace().collect()
    }

    /// Reconstruye texto uniendo los tokens con un único espacio
    pub fn reconstruct<S: Borrow<str>>(&self, tokens: &[S]) -> String {
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_simple() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.words("hello   world\n\tagain");

        assert_eq!(words, vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_words_keep_glued_punctuation() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.words("Hi, there!");

        assert_eq!(words, vec!["Hi,", "there!"]);
    }

    #[test]
    fn test_reconstruct() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.words("  uno  dos tres ");

        assert_eq!(tokenizer.reconstruct(&words), "uno dos tres");
        assert_eq!(tokenizer.reconstruct::<&str>(&[]), "");
    }

    #[test]
    fn test_reconstruct_owned_words() {
        let tokenizer = Tokenizer::new();
        let words = vec!["HELLO".to_string(), "world,".to_string()];

        assert_eq!(tokenizer.reconstruct(&words), "HELLO world,");
    }

    #[test]
    fn test_word_view() {
        let word = Word::new("hour.");
        assert_eq!(word.core, "hour");
        assert_eq!(word.trailing, ".");
        assert_eq!(word.first_char(), Some('h'));

        let plain = Word::new("a");
        assert!(!plain.has_trailing_punctuation());

        let only_punct = Word::new("?!");
        assert_eq!(only_punct.core, "");
        assert_eq!(only_punct.trailing, "?!");
        assert_eq!(only_punct.first_char(), None);
    }

    #[test]
    fn test_char_classes() {
        for ch in ['.', ',', '!', '?', ':', ';'] {
            assert!(is_punctuation(ch));
        }
        assert!(!is_punctuation('\''));
        assert!(is_quote('\''));
        assert!(!is_quote('"'));
    }
}
