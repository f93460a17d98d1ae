use anyhow::Result;
use brocante_core::gate::ProtectedAction;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "brocante")]
#[command(about = "Brocante CLI - browse and query a second-hand marketplace catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Catalog fixture to load instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Configuration file to use instead of ~/.config/brocante/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog by text, category and city
    Search {
        /// Case-insensitive text matched against titles and descriptions
        #[arg(short, long)]
        query: Option<String>,

        /// Category id or name
        #[arg(short, long)]
        category: Option<String>,

        /// Exact city name
        #[arg(long)]
        city: Option<String>,
    },
    /// List the cities offered by the location picker
    Cities {
        /// Case-insensitive substring to narrow the list
        #[arg(short, long)]
        term: Option<String>,
    },
    /// Show a single listing
    Show {
        /// Item id
        id: String,
    },
    /// Check whether a protected action may proceed
    Gate {
        /// One of: post-item, send-message, view-messages, view-profile
        action: ProtectedAction,

        /// Evaluate for a signed-out session
        #[arg(long)]
        logged_out: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default configuration file if none exists
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let service = commands::utils::config_service(&cli.global)?;
    commands::utils::init_tracing(&service);

    match cli.command {
        Commands::Search {
            query,
            category,
            city,
        } => commands::search::run(&cli.global, &service, query, category, city)?,
        Commands::Cities { term } => commands::cities::run(&cli.global, &service, term)?,
        Commands::Show { id } => commands::show::run(&cli.global, &service, &id)?,
        Commands::Gate { action, logged_out } => {
            commands::gate::run(&cli.global, &service, action, logged_out)?
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&service),
            ConfigAction::Show => commands::config::show(&cli.global, &service)?,
            ConfigAction::Init => commands::config::init(&service)?,
        },
    }

    Ok(())
}
