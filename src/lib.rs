pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon_generator;
pub mod lexicon_io;
pub mod parsing;
pub mod types {
    pub mod source_data;
}

pub use config::Config;
pub use engine::Lexicon;
pub use error::{LexiconError, Result};
pub use lexicon_generator::{run_lexicon_build, BuildArgs, BuildSummary};
