//! Reloaded - Post-procesador de texto
//!
//! Aplica directivas en línea (`(up)`, `(hex)`, `(cap, 2)`...), normaliza la
//! puntuación y corrige el artículo indefinido "a"/"an".

pub mod articles;
pub mod config;
pub mod corrector;
pub mod directives;
pub mod error;
pub mod punctuation;
pub mod tokenizer;

pub use config::Config;
pub use corrector::{Corrector, Stage};
pub use error::ReloadedError;
