use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use panel_settings::config::PanelConfig;

mod cli;

#[derive(Parser)]
#[command(name = "panel-settings")]
#[command(about = "View and edit the assistant extension's connection and device settings")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.panel-settings/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved settings
    Show {
        /// Show API keys in plain text
        #[arg(long)]
        reveal: bool,
    },

    /// Edit settings (e.g. `set model=gemini-3-flash language=zh`) and save
    Set {
        /// One or more field=value assignments
        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// List the selectable input devices
    Devices,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config, force).await;
    }

    let config = PanelConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Set { assignments }) => {
            cli::set::set_command(&config, &assignments).await?;
        }
        Some(Commands::Devices) => {
            cli::devices::devices_command(&config).await?;
        }
        Some(Commands::Show { reveal }) => {
            cli::show::show_command(&config, reveal).await?;
        }
        Some(Commands::Init { .. }) | None => {
            // Default: show settings with keys masked
            cli::show::show_command(&config, false).await?;
        }
    }

    Ok(())
}
