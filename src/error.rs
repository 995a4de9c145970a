use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

/// Everything that can stop a lexicon build.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("source_dir {0:?} is not a valid directory")]
    InvalidSourceDir(PathBuf),

    #[error(
        "Countability mismatch: '{class}' (countable={class_countable}) includes '{included}' (countable={included_countable})"
    )]
    CountabilityMismatch {
        class: String,
        class_countable: bool,
        included: String,
        included_countable: bool,
    },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LexiconError::Json {
            path: path.into(),
            source,
        }
    }
}
