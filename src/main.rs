//! `termhere` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "termhere", about = "Open a native terminal at a directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a terminal at PATH, or at the directory of a file
    Open {
        /// Selected file or directory
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// File being edited; its directory is used when PATH is omitted
        #[arg(long, value_name = "FILE")]
        active_file: Option<PathBuf>,

        /// Platform identifier (darwin, win32, linux, ...); defaults to this OS
        #[arg(long, value_name = "ID")]
        platform: Option<String>,

        /// Do not open a shell here when no terminal can be launched
        #[arg(long)]
        no_fallback: bool,
    },

    /// List the terminals that would be tried, in order
    Candidates {
        /// Directory to show in the commands
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Platform identifier; defaults to this OS
        #[arg(long, value_name = "ID")]
        platform: Option<String>,
    },

    /// Manage termhere configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            path,
            active_file,
            platform,
            no_fallback,
        } => {
            commands::open::cmd_open(commands::open::OpenArgs {
                path,
                active_file,
                platform,
                no_fallback,
            })
            .await?;
        }

        Commands::Candidates { dir, platform } => {
            commands::candidates::cmd_candidates(&dir, platform.as_deref())?;
        }

        Commands::Config { action } => commands::config::cmd_config(action)?,
    }

    Ok(())
}
