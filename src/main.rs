use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use lexicon_builder::config::{parse_config_file, Config};
use lexicon_builder::{run_lexicon_build, BuildArgs};

#[derive(Parser, Debug)]
#[command(name = "lexicon-builder")]
#[command(about = "Generate the word → categories lexicon from class and frame files")]
struct Cli {
    /// Output path for the generated JSON
    #[arg(short, long, default_value = "english.json")]
    output: PathBuf,

    /// TOML file naming the source directories and tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root of the source tree; overrides `source_dir` from the config
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Log skipped members and frames
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// `-s` wins over the file's `source_dir`; only the final directory is checked.
fn load_config(cli: &Cli) -> lexicon_builder::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => parse_config_file(path)?,
        None => Config::default(),
    };
    if let Some(source_dir) = &cli.source_dir {
        config.source_dir = source_dir.clone();
    }
    config.validate()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = load_config(&cli).and_then(|config| {
        let args = BuildArgs {
            output: cli.output.clone(),
        };
        run_lexicon_build(&config, &args)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
