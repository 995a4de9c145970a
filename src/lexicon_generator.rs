use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::engine::{assemble, AssemblyStats};
use crate::error::Result;
use crate::lexicon_io::save_lexicon;
use crate::parsing::load_sources;

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub output: PathBuf,
}

impl Default for BuildArgs {
    fn default() -> Self {
        BuildArgs {
            output: PathBuf::from("english.json"),
        }
    }
}

/// What a finished build wrote and how much of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub noun_classes: usize,
    pub verb_categories: usize,
    pub categories: usize,
    pub words: usize,
}

impl BuildSummary {
    fn new(output: PathBuf, stats: AssemblyStats) -> Self {
        BuildSummary {
            output,
            noun_classes: stats.noun_classes,
            verb_categories: stats.verb_categories,
            categories: stats.categories,
            words: stats.words,
        }
    }
}

/// Loads every source named by `config`, builds the lexicon and writes it to
/// `args.output`.
pub fn run_lexicon_build(config: &Config, args: &BuildArgs) -> Result<BuildSummary> {
    info!("Building lexicon from {}", config.source_dir.display());

    let sources = load_sources(config)?;
    let (lexicon, stats) = assemble(&sources)?;
    save_lexicon(&lexicon, &args.output)?;

    info!(
        "Wrote {} with {} unique words.",
        args.output.display(),
        lexicon.len()
    );
    Ok(BuildSummary::new(args.output.clone(), stats))
}
