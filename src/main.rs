use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use quizgen::cli;
use quizgen::config::Config;

#[derive(Parser)]
#[command(name = "quizgen")]
#[command(author, version, about = "quizgen - turn .quiz files into interactive HTML quizzes")]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build HTML pages from quiz files
    Build {
        /// Quiz files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Shuffle questions and options
        #[arg(long, short = 'r')]
        randomize: bool,

        /// Seed for --randomize, for reproducible pages
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (single input only)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Directory holding template/head/header/footer overrides
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Check quiz files for format errors
    Check {
        /// Quiz files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print a parsed quiz as JSON
    Dump {
        /// Quiz file
        path: PathBuf,
    },

    /// Print a quiz in canonical form
    Fmt {
        /// Quiz file
        path: PathBuf,
    },

    /// Create a sample quiz showing every feature
    Sample {
        /// Where to write it
        #[arg(default_value = "sample.quiz")]
        path: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let work_dir = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &work_dir)?;

    match cli.command {
        Commands::Build { paths, randomize, seed, output, assets } => {
            let options = cli::commands::BuildOptions {
                randomize,
                seed,
                output,
                assets_dir: assets,
            };
            cli::commands::build(&paths, &options, &config, &work_dir)
        }
        Commands::Check { paths } => cli::commands::check(&paths),
        Commands::Dump { path } => cli::commands::dump(&path),
        Commands::Fmt { path } => cli::commands::fmt(&path),
        Commands::Sample { path } => cli::commands::sample(&path),
    }
}
