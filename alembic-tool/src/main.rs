mod commands;
mod config;
mod error;
mod logging;

#[cfg(feature = "browse")]
mod browse;

use std::path::PathBuf;

use alembic_potterdb::PotterDbClient;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::commands::ListArgs;
use crate::config::load_config;

#[derive(Parser)]
#[command(name = "alb")]
#[command(about = "Alembic: browse the PotterDB potion catalog", long_about = None)]
struct Cli {
    /// PotterDB API base URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Path to the config file (default: ~/.config/alembic/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "browse")]
    /// Browse the catalog interactively (default)
    Browse,

    /// Print one page of the filtered catalog
    List {
        /// Case-insensitive name substring
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact difficulty, e.g. "Advanced"
        #[arg(long)]
        difficulty: Option<String>,

        /// Exact characteristic, e.g. "Pink in colour"
        #[arg(long)]
        characteristic: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print every field of one potion
    Show {
        /// Potion id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.resolve_log_file())?;

    let base_url = config.resolve_base_url(cli.endpoint);
    debug!(%base_url, "Starting alb");
    let client = PotterDbClient::with_base_url(base_url);

    match cli.command {
        #[cfg(feature = "browse")]
        None | Some(Command::Browse) => {
            browse::run(client).await?;
        }
        #[cfg(not(feature = "browse"))]
        None => {
            anyhow::bail!("no command given; try `alb list`");
        }
        Some(Command::List {
            search,
            difficulty,
            characteristic,
            page,
            json,
        }) => {
            let args = ListArgs {
                search,
                difficulty,
                characteristic,
                page,
                json,
            };
            commands::list(&client, args).await?;
        }
        Some(Command::Show { id }) => {
            commands::show(&client, &id).await?;
        }
    }

    Ok(())
}
