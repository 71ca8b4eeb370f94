//! Errores del post-procesador
//!
//! Las fases de corrección nunca fallan; solo la lectura y escritura de
//! archivos pueden producir un error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReloadedError {
    #[error("Error leyendo archivo '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error escribiendo archivo '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReloadedError {
    /// Ruta del archivo implicado
    pub fn path(&self) -> &PathBuf {
        match self {
            ReloadedError::Read { path, .. } | ReloadedError::Write { path, .. } => path,
        }
    }
}
