mod analyze;
mod render;
mod taxonomy;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newslens")]
#[command(about = "Comparative sentiment and topic reports for company news coverage")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a comparative report for a company
    Analyze {
        /// Company to report on
        company: String,

        /// Read articles from a JSON file instead of the news feed
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the raw articles the news feed returns for a company
    Fetch {
        /// Company to search for
        company: String,
    },
    /// Taxonomy file utilities
    Taxonomy {
        #[command(subcommand)]
        command: TaxonomyCommands,
    },
}

#[derive(Debug, Subcommand)]
enum TaxonomyCommands {
    /// Validate a taxonomy file
    Check {
        /// Path to the taxonomy file (defaults to `NEWSLENS_TAXONOMY_PATH`)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = newslens_core::load_app_config()?;
    // Logs go to stderr so reports on stdout stay machine-readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            company,
            input,
            format,
        }) => analyze::run_analyze(&config, &company, input.as_deref(), format).await?,
        Some(Commands::Fetch { company }) => analyze::run_fetch(&config, &company).await?,
        Some(Commands::Taxonomy {
            command: TaxonomyCommands::Check { path },
        }) => {
            let path = path.as_deref().unwrap_or(config.taxonomy_path.as_path());
            taxonomy::run_taxonomy_check(path)?;
        }
        None => println!("newslens: run `newslens --help` for available commands"),
    }

    Ok(())
}
