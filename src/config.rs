//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "reloaded",
    version,
    about = "Post-procesador de texto: directivas en línea, puntuación y artículos",
    after_help = "EJEMPLOS:\n    reloaded entrada.txt salida.txt\n    reloaded --no-articles entrada.txt salida.txt"
)]
pub struct Config {
    /// Archivo de entrada
    #[arg(value_name = "ENTRADA")]
    pub input_file: PathBuf,
    /// Archivo de salida
    #[arg(value_name = "SALIDA")]
    pub output_file: PathBuf,
    /// Desactiva la corrección de artículos "a" -> "an"
    #[arg(long = "no-articles")]
    pub no_articles: bool,
    /// Muestra el registro de cada fase en stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: PathBuf::new(),
            no_articles: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Construye la configuración desde la línea de comandos (incluye el nombre del programa).
    ///
    /// `--help` y `--version` también llegan como `Err`; `use_stderr()` los distingue
    /// de un error de uso.
    pub fn from_args(args: Vec<String>) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    pub fn articles_enabled(&self) -> bool {
        !self.no_articles
    }
}
