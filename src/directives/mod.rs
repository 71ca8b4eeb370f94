//! Directivas en línea
//!
//! Marcadores entre paréntesis como `(up)` o `(cap, 3)` que transforman las
//! palabras anteriores y desaparecen del texto.

pub mod directive;
pub mod interpreter;
pub mod operation;

pub use directive::Directive;
pub use interpreter::DirectiveInterpreter;
pub use operation::Operation;
