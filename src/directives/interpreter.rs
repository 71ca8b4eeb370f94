//! Intérprete de directivas
//!
//! Recorre las palabras de izquierda a derecha construyendo la salida. Cada
//! directiva transforma las palabras ya emitidas y no se copia a la salida,
//! de modo que la palabra que sigue a una directiva se examina a continuación
//! (las directivas pueden encadenarse).

use super::Directive;
use crate::tokenizer::Tokenizer;

/// Intérprete de directivas en línea
#[derive(Debug, Default, Clone)]
pub struct DirectiveInterpreter {
    tokenizer: Tokenizer,
}

impl DirectiveInterpreter {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Aplica y elimina todas las directivas reconocidas.
    ///
    /// Los espacios se normalizan: las palabras se unen con un único espacio.
    pub fn interpret(&self, text: &str) -> String {
        let words = self.tokenizer.words(text);
        let mut output: Vec<String> = Vec::with_capacity(words.len());
        let mut applied = 0usize;
        let mut i = 0;

        while i < words.len() {
            match Directive::parse(words[i], words.get(i + 1).copied()) {
                Some(directive) => {
                    tracing::debug!(
                        operation = %directive.operation,
                        scope = directive.scope,
                        paired = directive.is_paired,
                        available = output.len(),
                        "directiva aplicada"
                    );
                    directive.apply(&mut output);
                    applied += 1;
                    i += directive.consumed();
                }
                None => {
                    output.push(words[i].to_string());
                    i += 1;
                }
            }
        }

        tracing::debug!(directives = applied, words = output.len(), "directivas procesadas");
        self.tokenizer.reconstruct(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(text: &str) -> String {
        DirectiveInterpreter::new().interpret(text)
    }

    #[test]
    fn test_no_directives_collapses_whitespace() {
        assert_eq!(interpret("  hello \n  world\t!  "), "hello world !");
        assert_eq!(interpret(""), "");
    }

    #[test]
    fn test_up_and_cap() {
        assert_eq!(interpret("hello (up)"), "HELLO");
        assert_eq!(interpret("hello world (cap, 2)"), "Hello World");
        assert_eq!(interpret("hello world (cap,2)"), "hello world (cap,2)");
    }

    #[test]
    fn test_directive_at_start_has_no_targets() {
        assert_eq!(interpret("(up) hello"), "hello");
    }

    #[test]
    fn test_numeric_directives() {
        assert_eq!(interpret("ff (hex) files"), "255 files");
        assert_eq!(interpret("zz (hex)"), "0");
        assert_eq!(interpret("It has 10 (bin) legs"), "It has 2 legs");
    }

    #[test]
    fn test_scope_larger_than_available() {
        assert_eq!(interpret("go home (up, 10)"), "GO HOME");
    }

    #[test]
    fn test_paired_applies_to_preceding_words() {
        assert_eq!(interpret("go home now (up, 2) please"), "go HOME NOW please");
    }

    #[test]
    fn test_bad_count_leaves_count_token() {
        assert_eq!(interpret("hello world (up, x)"), "hello WORLD x)");
    }

    #[test]
    fn test_unknown_directive_is_kept() {
        assert_eq!(interpret("hello (foo) world"), "hello (foo) world");
        assert_eq!(interpret("a (note) b (up)"), "a (note) B");
    }

    #[test]
    fn test_unknown_marker_can_be_a_target() {
        assert_eq!(interpret("(note) (up)"), "(NOTE)");
    }

    #[test]
    fn test_adjacent_directives_rescan() {
        // La segunda directiva se examina tras eliminar la primera
        assert_eq!(interpret("Hi (low) (up)"), "HI");
        assert_eq!(interpret("Hello (up) (low)"), "hello");
        assert_eq!(interpret("(up) (low) Hi"), "Hi");
        assert_eq!(interpret("ff (hex) (bin)"), "0");
    }

    #[test]
    fn test_chained_directives_do_not_target_each_other() {
        assert_eq!(interpret("one two (up) (cap, 2) three"), "One Two three");
    }

    #[test]
    fn test_negative_count_consumes_both_tokens() {
        assert_eq!(interpret("keep this (up, -1) end"), "keep this end");
    }
}
