//! Reconocimiento de marcadores de directiva

use super::Operation;

/// Directiva reconocida en el flujo de palabras
///
/// Se reconoce, se aplica y se descarta en la misma pasada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub operation: Operation,
    /// Número de palabras anteriores afectadas
    pub scope: usize,
    /// El alcance vino de un segundo token (`(up, 2)`) que también se consume
    pub is_paired: bool,
}

impl Directive {
    /// Reconoce una directiva en `token`, mirando `next` para la forma con contador.
    ///
    /// - `(op)`: alcance 1.
    /// - `(op,` seguido de `n)`: alcance n, se consumen los dos tokens. Un
    ///   contador negativo deja el alcance en 0.
    /// - `(op,` con un contador ilegible: alcance 1 y el contador queda en el
    ///   texto como palabra normal.
    ///
    /// Devuelve `None` si el token no es un marcador o la operación no existe.
    pub fn parse(token: &str, next: Option<&str>) -> Option<Self> {
        if !token.starts_with('(') {
            return None;
        }

        if token.ends_with(')') {
            let name = token.trim_matches(|c: char| c == '(' || c == ')');
            return Operation::from_name(name).map(|operation| Self {
                operation,
                scope: 1,
                is_paired: false,
            });
        }

        let count_token = next.filter(|_| token.ends_with(','))?;
        if !count_token.ends_with(')') {
            return None;
        }

        let operation = Operation::from_name(token.trim_matches(|c: char| c == '(' || c == ','))?;
        let count_text = count_token.trim_matches(|c: char| c == '(' || c == ')');
        match count_text.parse::<i64>() {
            Ok(count) => Some(Self {
                operation,
                scope: usize::try_from(count).unwrap_or(0),
                is_paired: true,
            }),
            Err(_) => {
                tracing::trace!(
                    operation = %operation,
                    count = count_text,
                    "contador ilegible, se aplica a una palabra"
                );
                Some(Self {
                    operation,
                    scope: 1,
                    is_paired: false,
                })
            }
        }
    }

    /// Tokens que ocupa el marcador en el flujo
    pub fn consumed(&self) -> usize {
        if self.is_paired {
            2
        } else {
            1
        }
    }

    /// Aplica la operación a las últimas `scope` palabras, de la más cercana a
    /// la más lejana. Si hay menos palabras que el alcance, se aplica a todas.
    pub fn apply(&self, words: &mut [String]) {
        let start = words.len().saturating_sub(self.scope);
        for word in words[start..].iter_mut().rev() {
            *word = self.operation.apply(word);
        }
    }
}
