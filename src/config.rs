use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LexiconError, Result};

/// Where the class files, frame files and tables live.
///
/// Every path except `source_dir` is resolved against `source_dir` unless it
/// is already absolute.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub source_dir: PathBuf,
    pub nouns_dir: PathBuf,
    pub adjectives_dir: PathBuf,
    pub adverbs_dir: PathBuf,
    pub prepositions_dir: PathBuf,
    pub verb_dirs: Vec<PathBuf>,
    pub irregular_nouns: PathBuf,
    pub irregular_verbs: PathBuf,
    pub indeclinable: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from("."),
            nouns_dir: PathBuf::from("nouns"),
            adjectives_dir: PathBuf::from("adjectives"),
            adverbs_dir: PathBuf::from("adverbs"),
            prepositions_dir: PathBuf::from("prepositions"),
            verb_dirs: vec![PathBuf::from("verb_verbnet"), PathBuf::from("verb_custom")],
            irregular_nouns: PathBuf::from("irregular_noun_forms.json"),
            irregular_verbs: PathBuf::from("irregular_verb_forms.json"),
            indeclinable: PathBuf::from("indeclinable.json"),
        }
    }
}

impl Config {
    /// Default layout rooted at `source_dir`.
    pub fn with_source_dir(source_dir: impl Into<PathBuf>) -> Self {
        Config {
            source_dir: source_dir.into(),
            ..Default::default()
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.source_dir.join(path)
        }
    }

    pub fn nouns_path(&self) -> PathBuf {
        self.resolve(&self.nouns_dir)
    }

    pub fn adjectives_path(&self) -> PathBuf {
        self.resolve(&self.adjectives_dir)
    }

    pub fn adverbs_path(&self) -> PathBuf {
        self.resolve(&self.adverbs_dir)
    }

    pub fn prepositions_path(&self) -> PathBuf {
        self.resolve(&self.prepositions_dir)
    }

    pub fn verb_paths(&self) -> Vec<PathBuf> {
        self.verb_dirs.iter().map(|d| self.resolve(d)).collect()
    }

    pub fn irregular_nouns_path(&self) -> PathBuf {
        self.resolve(&self.irregular_nouns)
    }

    pub fn irregular_verbs_path(&self) -> PathBuf {
        self.resolve(&self.irregular_verbs)
    }

    pub fn indeclinable_path(&self) -> PathBuf {
        self.resolve(&self.indeclinable)
    }

    pub fn validate(self) -> Result<Self> {
        if self.source_dir.is_dir() {
            Ok(self)
        } else {
            Err(LexiconError::InvalidSourceDir(self.source_dir))
        }
    }
}

/// Reads a TOML config without checking it. A relative `source_dir` is taken
/// relative to the directory holding the config file.
pub fn parse_config_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| LexiconError::io(file_path, e))?;
    let mut loaded_config: Config =
        toml::from_str(&contents).map_err(|e| LexiconError::ConfigParse {
            path: file_path.to_path_buf(),
            source: e,
        })?;

    if loaded_config.source_dir.is_relative() {
        if let Some(parent) = file_path.parent() {
            loaded_config.source_dir = parent.join(&loaded_config.source_dir);
        }
    }

    Ok(loaded_config)
}

/// Reads a TOML config and checks that its `source_dir` exists.
pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    parse_config_file(file_path)?.validate()
}
