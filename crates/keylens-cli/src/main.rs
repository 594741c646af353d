use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod bootstrap;
mod commands;
mod config;
mod output;
mod repl;

use bootstrap::SessionScope;
use config::ViewerConfig;

#[derive(Parser)]
#[command(name = "keylens")]
#[command(about = "KeyLens - ranked job-skill keyword viewer", long_about = None)]
struct Cli {
    /// Catalog CSV path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Session id ("new" generates a fresh one)
    #[arg(long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable job categories
    Categories,
    /// Render the ranked keyword table for a category
    View { category: String },
    /// Select one keyword and show its detail notes
    Select { category: String, keyword: String },
    /// Unselect one keyword
    Deselect { category: String, keyword: String },
    /// Clear the session's selection
    Clear { category: String },
    /// Dump the raw catalog records
    Raw,
    /// Interactive viewer
    Repl {
        /// Keep session state in memory only (no state file)
        #[arg(long)]
        ephemeral: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ViewerConfig::load()?;
    let session_id = resolve_session_id(cli.session, &config);

    let scope = match cli.command {
        Commands::Repl { ephemeral: true } => SessionScope::Ephemeral,
        _ => SessionScope::Persistent(session_id),
    };
    let viewer = bootstrap::build_viewer(&config, cli.catalog, scope).await?;

    match cli.command {
        Commands::Categories => commands::categories::run(&viewer).await?,
        Commands::View { category } => commands::view::run(&viewer, &category).await?,
        Commands::Select { category, keyword } => {
            commands::select::run(&viewer, &category, &keyword, true).await?
        }
        Commands::Deselect { category, keyword } => {
            commands::select::run(&viewer, &category, &keyword, false).await?
        }
        Commands::Clear { category } => commands::clear::run(&viewer, &category).await?,
        Commands::Raw => commands::raw::run(&viewer).await?,
        Commands::Repl { .. } => repl::run(&viewer).await?,
    }

    Ok(())
}

fn resolve_session_id(flag: Option<String>, config: &ViewerConfig) -> String {
    match flag {
        Some(session) if session == "new" => uuid::Uuid::new_v4().to_string(),
        Some(session) => session,
        None => config.session.clone().unwrap_or_else(|| "default".to_string()),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keylens=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
