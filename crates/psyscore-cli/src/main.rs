use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "psyscore")]
#[command(about = "Score questionnaires from survey exports and generate new scoring modules")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every recognised questionnaire in a CSV export
    Score {
        input: PathBuf,
        /// Defaults to analysis_results_<input stem>.csv next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory of extra JSON configurations, such as a `generate` output
        /// directory; replaces built-ins with the same prefix
        #[arg(long, env = "PSYSCORE_DEFINITIONS")]
        definitions: Option<PathBuf>,
    },
    /// Check a configuration and print every issue found
    Validate { config: PathBuf },
    /// Validate, synthesize and emit a scoring module for a configuration
    Generate {
        config: PathBuf,
        #[arg(long, default_value = "generated")]
        out_dir: PathBuf,
        /// Resolve item columns against this CSV header instead of the naming pattern
        #[arg(long)]
        header: Option<PathBuf>,
    },
    /// Write a sample configuration to start from
    Example {
        #[arg(short, long, default_value = "sample_questionnaire_config.json")]
        output: PathBuf,
    },
    /// List built-in questionnaires and any extra configurations
    List {
        #[arg(long, env = "PSYSCORE_DEFINITIONS")]
        definitions: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Score {
            input,
            output,
            definitions,
        } => commands::score(&input, output, definitions.as_deref()),
        Command::Validate { config } => {
            if !commands::validate(&config)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Generate {
            config,
            out_dir,
            header,
        } => commands::generate(&config, &out_dir, header.as_deref()),
        Command::Example { output } => commands::example(&output),
        Command::List { definitions } => commands::list(definitions.as_deref()),
    }
}
