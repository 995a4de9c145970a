use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{LexiconError, Result};
use crate::types::source_data::LexiconSources;

pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| LexiconError::json(path, e))
}

/// Every `*.json` directly inside `dir`, sorted by file name.
/// A missing directory yields nothing.
pub fn scan_json_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Source directory {:?} not found, skipping", dir);
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| LexiconError::io(dir, e))? {
        let path = entry.map_err(|e| LexiconError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Loads each file of `dir`, keyed by file stem. A file whose stem is not
/// UTF-8 cannot be named and is skipped with a warning.
pub fn load_json_dir<T: DeserializeOwned>(dir: &Path) -> Result<BTreeMap<String, T>> {
    let mut loaded = BTreeMap::new();
    for path in scan_json_dir(dir)? {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!("Skipping {:?}: file name is not valid UTF-8", path);
            continue;
        };
        let stem = stem.to_string();
        loaded.insert(stem, load_json_file(&path)?);
    }
    Ok(loaded)
}

/// Loads each file of `dir` in path order, whatever its name.
pub fn load_json_dir_values<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    scan_json_dir(dir)?
        .iter()
        .map(|path| load_json_file(path))
        .collect()
}

/// Reads every input named by `config` into memory.
///
/// The irregular-form tables and the indeclinable table are required; the
/// class and frame directories are optional.
pub fn load_sources(config: &Config) -> Result<LexiconSources> {
    let irregular_nouns = load_json_file(&config.irregular_nouns_path())?;
    let irregular_verbs = load_json_file(&config.irregular_verbs_path())?;
    let indeclinable = load_json_file(&config.indeclinable_path())?;

    let mut verb_classes = Vec::new();
    for dir in config.verb_paths() {
        verb_classes.extend(load_json_dir_values(&dir)?);
    }

    let sources = LexiconSources {
        indeclinable,
        adjectives: load_json_dir_values(&config.adjectives_path())?,
        adverbs: load_json_dir_values(&config.adverbs_path())?,
        prepositions: load_json_dir_values(&config.prepositions_path())?,
        nouns: load_json_dir(&config.nouns_path())?,
        verb_classes,
        irregular_nouns,
        irregular_verbs,
    };

    info!(
        "Loaded {} noun, {} adjective, {} adverb, {} preposition and {} verb class files",
        sources.nouns.len(),
        sources.adjectives.len(),
        sources.adverbs.len(),
        sources.prepositions.len(),
        sources.verb_classes.len()
    );
    Ok(sources)
}
