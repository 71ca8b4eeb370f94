//! Motor principal de corrección

use std::fs;
use std::path::Path;

use crate::articles::ArticleCorrector;
use crate::config::Config;
use crate::directives::DirectiveInterpreter;
use crate::error::ReloadedError;
use crate::punctuation::PunctuationNormalizer;

/// Fases del pipeline, en orden de ejecución
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Directives,
    Punctuation,
    Articles,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Directives => "directivas",
            Stage::Punctuation => "puntuación",
            Stage::Articles => "artículos",
        }
    }
}

/// Motor principal del corrector
///
/// No guarda estado entre llamadas: cada corrección es una función pura del texto.
pub struct Corrector {
    stages: Vec<Stage>,
    interpreter: DirectiveInterpreter,
    articles: ArticleCorrector,
}

impl Corrector {
    /// Crea una nueva instancia del corrector
    pub fn new(config: &Config) -> Self {
        let mut stages = vec![Stage::Directives, Stage::Punctuation];
        if config.articles_enabled() {
            stages.push(Stage::Articles);
        }

        Self {
            stages,
            interpreter: DirectiveInterpreter::new(),
            articles: ArticleCorrector::new(),
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Corrige el texto proporcionado.
    ///
    /// Nunca falla; el resultado termina siempre en exactamente un salto de línea.
    pub fn correct(&self, text: &str) -> String {
        let mut current = text.to_string();

        for stage in &self.stages {
            current = self.run_stage(*stage, &current);
            tracing::debug!(stage = stage.name(), len = current.len(), "fase completada");
        }

        ensure_trailing_newline(current)
    }

    fn run_stage(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::Directives => self.interpreter.interpret(text),
            Stage::Punctuation => PunctuationNormalizer::normalize(text),
            Stage::Articles => self.articles.correct(text),
        }
    }

    /// Lee `input` completo, lo corrige y escribe el resultado en `output`
    pub fn correct_file(&self, input: &Path, output: &Path) -> Result<(), ReloadedError> {
        let text = fs::read_to_string(input).map_err(|source| ReloadedError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %input.display(), bytes = text.len(), "archivo leído");

        let result = self.correct(&text);

        fs::write(output, &result).map_err(|source| ReloadedError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %output.display(), bytes = result.len(), "archivo escrito");
        Ok(())
    }
}

impl Default for Corrector {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn ensure_trailing_newline(mut text: String) -> String {
    while text.ends_with('\n') {
        text.pop();
    }
    text.push('\n');
    text
}
