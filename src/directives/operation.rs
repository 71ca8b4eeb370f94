//! Operaciones de las directivas

use std::fmt;

/// Operación reconocida por una directiva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Hexadecimal a decimal
    Hex,
    /// Binario a decimal
    Bin,
    /// Mayúsculas
    Up,
    /// Minúsculas
    Low,
    /// Primera letra de cada palabra en mayúscula
    Cap,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Hex,
        Operation::Bin,
        Operation::Up,
        Operation::Low,
        Operation::Cap,
    ];

    /// Operación para un nombre de directiva; `None` si no es una directiva conocida
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Hex => "hex",
            Operation::Bin => "bin",
            Operation::Up => "up",
            Operation::Low => "low",
            Operation::Cap => "cap",
        }
    }

    /// Aplica la operación a una palabra. Nunca falla: un número que no se
    /// puede leer se convierte en "0".
    pub fn apply(&self, word: &str) -> String {
        match self {
            Operation::Hex => to_decimal(word, 16),
            Operation::Bin => to_decimal(word, 2),
            Operation::Up => word.to_uppercase(),
            Operation::Low => word.to_lowercase(),
            Operation::Cap => capitalize(word),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn to_decimal(word: &str, radix: u32) -> String {
    match i64::from_str_radix(word, radix) {
        Ok(value) => value.to_string(),
        Err(e) => {
            tracing::trace!(word, radix, error = %e, "número ilegible, se usa 0");
            "0".to_string()
        }
    }
}

/// Minúsculas y después mayúscula en la primera letra de cada tramo sin espacios.
/// Un dígito al inicio del tramo cuenta como primer carácter ("1st" no cambia).
fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut at_start = true;

    for ch in lower.chars() {
        if ch.is_whitespace() {
            at_start = true;
            result.push(ch);
        } else if at_start && ch.is_alphanumeric() {
            at_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
    }

    result
}
