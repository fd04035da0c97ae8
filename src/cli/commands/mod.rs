//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Catalog search and adding an album (the default action)
//! - `list`: Printing the collection
//! - `config`: Locating and initialising the config file

mod config;
mod list;
mod search;

use clap::{Args, Parser, Subcommand};
use tokio::runtime::Runtime;

pub use config::{cmd_config_init, cmd_config_path};
pub use list::cmd_list;
pub use search::cmd_search;

/// Search for albums and add them to your record collection
#[derive(Parser)]
#[command(name = "vinyls", author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub search: SearchArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags for the default search action
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Artist name
    #[arg(long, value_name = "NAME")]
    pub artist: Option<String>,
    /// Album title
    #[arg(long, value_name = "NAME")]
    pub album: Option<String>,
    /// Add to the wishlist instead of the owned records
    #[arg(short, long)]
    pub wishlist: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List the records in the collection
    List {
        /// Show the wishlist instead of the owned records
        #[arg(short, long)]
        wishlist: bool,
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print where the config file lives
    Path,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the command line.
///
/// With no subcommand the search flags are used; missing flags are reported
/// by the search workflow itself.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::List { wishlist, json }) => cmd_list(*wishlist, *json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => cmd_config_path(),
            ConfigAction::Init { force } => cmd_config_init(*force),
        },
        None => {
            let rt = Runtime::new()?;
            cmd_search(&rt, &cli.search)
        }
    }
}
