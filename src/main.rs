use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod detect;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod updater;
mod widgets;

use crate::domain::Network;
use crate::state::{App, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ASCII art logo
const LOGO: &str = r#"
████████╗ ██████╗ ██╗  ██╗███████╗███╗   ██╗██╗    ██╗ █████╗ ████████╗ ██████╗██╗  ██╗
╚══██╔══╝██╔═══██╗██║ ██╔╝██╔════╝████╗  ██║██║    ██║██╔══██╗╚══██╔══╝██╔════╝██║  ██║
   ██║   ██║   ██║█████╔╝ █████╗  ██╔██╗ ██║██║ █╗ ██║███████║   ██║   ██║     ███████║
   ██║   ██║   ██║██╔═██╗ ██╔══╝  ██║╚██╗██║██║███╗██║██╔══██║   ██║   ██║     ██╔══██║
   ██║   ╚██████╔╝██║  ██╗███████╗██║ ╚████║╚███╔███╔╝██║  ██║   ██║   ╚██████╗██║  ██║
   ╚═╝    ╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═══╝ ╚══╝╚══╝ ╚═╝  ╚═╝   ╚═╝    ╚═════╝╚═╝  ╚═╝
"#;

/// tokenwatch - Terminal dashboard for watch-only Ethereum accounts
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start on a specific network (mainnet, sepolia, localnet)
    #[arg(long)]
    network: Option<String>,

    /// Add an address to the watch list and select it
    #[arg(long)]
    watch: Option<String>,

    /// Seconds between automatic token detection passes
    #[arg(long)]
    interval: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for updates
    Update {
        /// Install the latest version if available
        #[arg(short, long)]
        install: bool,
    },
    /// Display version with ASCII art
    Version,
}

/// Application entry point.
#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging()?;

    let cli = Cli::parse();
    if handle_cli_commands(&cli)? {
        return Ok(());
    }

    color_eyre::install()?;

    let startup_options = StartupOptions {
        network: cli.network.as_deref().map(parse_network).transpose()?,
        watch_address: cli.watch,
        interval_secs: cli.interval,
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(startup_options)?;
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Routes tracing output to a log file; stdout belongs to the TUI.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| eyre!("could not determine local data directory"))?
        .join("tokenwatch")
        .join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "tokenwatch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn parse_network(name: &str) -> Result<Network> {
    match name.to_ascii_lowercase().as_str() {
        "mainnet" => Ok(Network::MainNet),
        "sepolia" => Ok(Network::Sepolia),
        "localnet" => Ok(Network::LocalNet),
        other => Err(eyre!(
            "unknown network '{other}', expected mainnet, sepolia or localnet"
        )),
    }
}

/// Handles CLI subcommands.
/// Returns Ok(true) if a command was handled and the app should exit.
fn handle_cli_commands(cli: &Cli) -> Result<bool> {
    if let Some(command) = &cli.command {
        match command {
            Commands::Update { install } => {
                match updater::check_for_updates() {
                    Ok(Some(latest_version)) => {
                        println!("Update available: {latest_version}");
                        if *install {
                            println!("Attempting to install...");
                            match updater::update_app() {
                                Ok(()) => println!("Update successful!"),
                                Err(e) => eprintln!("Update failed: {e}"),
                            }
                        } else {
                            println!("Run with '--install' flag to install.");
                        }
                    }
                    Ok(None) => println!("Already using the latest version."),
                    Err(e) => eprintln!("Failed to check for updates: {e}"),
                }
                return Ok(true);
            }
            Commands::Version => {
                println!("{LOGO}");
                println!("tokenwatch v{VERSION}");
                println!("A terminal dashboard for watch-only Ethereum accounts");
                return Ok(true);
            }
        }
    }
    Ok(false)
}
