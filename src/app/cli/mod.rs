//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::AppError;
use crate::{PredictionSource, VisionOptions};

#[derive(Parser)]
#[command(name = "bright-futures")]
#[command(version)]
#[command(
    about = "Cast a bright future, ask Gemini why, and render it as a shareable vision card",
    long_about = None
)]
struct Cli {
    /// Path to a bright-futures.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct PredictionArgs {
    /// Sector to predict for (requires --technology)
    #[arg(long, requires = "technology", conflicts_with = "seed")]
    sector: Option<String>,
    /// Technology behind the prediction (requires --sector)
    #[arg(long, requires = "sector", conflicts_with = "seed")]
    technology: Option<String>,
    /// Seed for a reproducible random prediction
    #[arg(long)]
    seed: Option<u64>,
}

impl From<PredictionArgs> for PredictionSource {
    fn from(args: PredictionArgs) -> Self {
        Self { sector: args.sector, technology: args.technology, seed: args.seed }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a random prediction
    #[clap(visible_alias = "p")]
    Predict {
        /// Seed for a reproducible random prediction
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Ask why the future will be bright
    #[clap(visible_alias = "e")]
    Explain {
        #[command(flatten)]
        prediction: PredictionArgs,
    },
    /// Render the 1920x1080 vision card
    #[clap(visible_alias = "v")]
    Vision {
        #[command(flatten)]
        prediction: PredictionArgs,
        /// Use this explanation instead of requesting one
        #[arg(long)]
        explanation: Option<String>,
        /// Directory to write the PNG into
        #[arg(short, long, conflicts_with = "data_uri")]
        output: Option<PathBuf>,
        /// Print the PNG as a data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },
    /// Share the prediction, or copy it to the clipboard
    #[clap(visible_alias = "s")]
    Share {
        #[command(flatten)]
        prediction: PredictionArgs,
        /// Use this explanation instead of requesting one
        #[arg(long)]
        explanation: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Predict { seed } => {
            crate::predict(&PredictionSource { seed, ..PredictionSource::default() }).map(|_| ())
        }
        Commands::Explain { prediction } => crate::explain(config, &prediction.into()).map(|_| ()),
        Commands::Vision { prediction, explanation, output, data_uri } => {
            let options = VisionOptions { explanation, output, data_uri };
            crate::vision(config, &prediction.into(), &options).map(|_| ())
        }
        Commands::Share { prediction, explanation } => {
            crate::share(config, &prediction.into(), explanation.as_deref()).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
