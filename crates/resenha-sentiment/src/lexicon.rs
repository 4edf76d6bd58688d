//! The polarity lexicon: word → signed weight in [-1, 1].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use resenha_core::config::LexiconSource;
use resenha_core::errors::LexiconError;

/// Version tag of the embedded Portuguese lexicon.
pub const EMBEDDED_VERSION: &str = "ptbr-v1";

/// Positive entries of the embedded lexicon. Graded: strong praise 1.0,
/// milder approval less.
const POSITIVE: &[(&str, f64)] = &[
    ("excelente", 1.0),
    ("maravilhoso", 1.0),
    ("maravilhosa", 1.0),
    ("perfeito", 1.0),
    ("perfeita", 1.0),
    ("incrível", 1.0),
    ("amei", 1.0),
    ("adorei", 1.0),
    ("ótimo", 0.9),
    ("ótima", 0.9),
    ("otimo", 0.9),
    ("otima", 0.9),
    ("parabéns", 0.9),
    ("parabens", 0.9),
    ("top", 0.8),
    ("melhor", 0.8),
    ("recomendo", 0.8),
    ("eficiente", 0.8),
    ("gostei", 0.7),
    ("satisfeito", 0.7),
    ("satisfeita", 0.7),
    ("bom", 0.6),
    ("boa", 0.6),
    ("legal", 0.6),
    ("útil", 0.6),
    ("util", 0.6),
    ("prático", 0.6),
    ("prática", 0.6),
    ("pratico", 0.6),
    ("pratica", 0.6),
    ("rápido", 0.6),
    ("rápida", 0.6),
    ("rapido", 0.6),
    ("rapida", 0.6),
    ("fácil", 0.6),
    ("facil", 0.6),
    ("funciona", 0.5),
    ("ajuda", 0.4),
];

/// Negative entries. Strong disgust -1.0, functional complaints less.
const NEGATIVE: &[(&str, f64)] = &[
    ("péssimo", -1.0),
    ("péssima", -1.0),
    ("pessimo", -1.0),
    ("pessima", -1.0),
    ("horrível", -1.0),
    ("horrivel", -1.0),
    ("terrível", -1.0),
    ("terrivel", -1.0),
    ("horrendo", -1.0),
    ("lixo", -1.0),
    ("porcaria", -1.0),
    ("merda", -1.0),
    ("nojo", -1.0),
    ("odiei", -1.0),
    ("inútil", -0.9),
    ("inutil", -0.9),
    ("pior", -0.9),
    ("decepcionante", -0.8),
    ("decepcionou", -0.8),
    ("decepção", -0.8),
    ("decepcao", -0.8),
    ("ruim", -0.8),
    ("desinstalei", -0.8),
    ("desinstalar", -0.7),
    ("trava", -0.7),
    ("travando", -0.7),
    ("travou", -0.7),
    ("bug", -0.6),
    ("erro", -0.6),
    ("falha", -0.6),
    ("quebrado", -0.6),
    ("parou", -0.6),
    ("lento", -0.6),
    ("lenta", -0.6),
    ("demora", -0.5),
    ("demorado", -0.5),
    ("propaganda", -0.4),
    ("anúncio", -0.4),
    ("anuncio", -0.4),
    ("anúncios", -0.4),
    ("anuncios", -0.4),
];

#[derive(Debug, Deserialize)]
struct LexiconFile {
    version: String,
    weights: HashMap<String, f64>,
}

/// A versioned word → polarity-weight mapping. Loaded once at engine
/// construction and shared read-only by all workers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    weights: HashMap<String, f64>,
}

impl Lexicon {
    /// The embedded Portuguese lexicon, `ptbr-v1`.
    pub fn embedded() -> Self {
        let weights = POSITIVE
            .iter()
            .chain(NEGATIVE.iter())
            .map(|(w, s)| (w.to_string(), *s))
            .collect();
        Self {
            version: EMBEDDED_VERSION.to_string(),
            weights,
        }
    }

    /// Load from a TOML file with a `version` key and a `[weights]`
    /// table. Missing or malformed files are fatal.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| LexiconError::NotFound {
            path: path.display().to_string(),
        })?;
        let file: LexiconFile = toml::from_str(&raw).map_err(|e| LexiconError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let lexicon = Self {
            version: file.version,
            weights: file.weights,
        };
        lexicon.ensure_non_empty()?;
        Ok(lexicon)
    }

    /// Resolve a configured source.
    pub fn load(source: &LexiconSource) -> Result<Self, LexiconError> {
        let lexicon = match source {
            LexiconSource::Embedded => Self::embedded(),
            LexiconSource::Path(path) => Self::from_path(path)?,
        };
        lexicon.ensure_non_empty()?;
        Ok(lexicon)
    }

    fn ensure_non_empty(&self) -> Result<(), LexiconError> {
        if self.weights.is_empty() {
            return Err(LexiconError::Empty {
                version: self.version.clone(),
            });
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Signed weight of a word, or `None` for out-of-vocabulary tokens
    /// (which the scorer silently skips).
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }
}
