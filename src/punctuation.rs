//! Normalización de puntuación
//!
//! - Los signos `. , ! ? : ;` se pegan a la palabra anterior y van seguidos
//!   de un único espacio (salvo que sigan otros signos, como en `?!`).
//! - Se eliminan los espacios junto a comillas simples: `' hola '` -> `'hola'`.

use crate::tokenizer::{is_punctuation, is_quote};

/// Normalizador de puntuación
pub struct PunctuationNormalizer;

impl PunctuationNormalizer {
    /// Pega la puntuación y después colapsa los espacios junto a comillas.
    ///
    /// El resultado es un punto fijo: normalizarlo de nuevo no lo cambia.
    pub fn normalize(text: &str) -> String {
        let glued = Self::glue_punctuation(text);
        Self::collapse_quote_spaces(&glued)
    }

    /// Quita los espacios anteriores a cada signo y añade uno detrás cuando
    /// le sigue directamente una palabra.
    ///
    /// Un signo al principio del texto (precedido solo de espacios) se deja
    /// como está, con sus espacios delante.
    pub fn glue_punctuation(text: &str) -> String {
        let mut result = String::with_capacity(text.len() + text.len() / 8);
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if !is_punctuation(ch) {
                result.push(ch);
                continue;
            }

            let visible = result.trim_end_matches(' ').len();
            if visible > 0 {
                result.truncate(visible);
            }
            result.push(ch);

            if let Some(&next) = chars.peek() {
                if !next.is_ascii_whitespace() && !is_punctuation(next) {
                    result.push(' ');
                }
            }
        }

        result
    }

    /// Elimina cada tramo de espacios que toca una comilla simple por
    /// cualquiera de sus extremos. Una sola pasada basta para llegar al punto
    /// fijo: `"x '   y"` -> `"x'y"`.
    pub fn collapse_quote_spaces(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut pending = 0usize;
        let mut before_run: Option<char> = None;
        let mut removed = 0usize;

        for ch in text.chars() {
            if ch == ' ' {
                pending += 1;
                continue;
            }

            if before_run.is_some_and(is_quote) || is_quote(ch) {
                removed += pending;
            } else {
                result.extend(std::iter::repeat(' ').take(pending));
            }
            pending = 0;
            result.push(ch);
            before_run = Some(ch);
        }

        if before_run.is_some_and(is_quote) {
            removed += pending;
        } else {
            result.extend(std::iter::repeat(' ').take(pending));
        }

        tracing::trace!(removed, "espacios junto a comillas eliminados");
        result
    }
}
