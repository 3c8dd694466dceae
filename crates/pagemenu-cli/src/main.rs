use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pagemenu_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagemenu")]
#[command(author, version, about = "Paged menu navigation in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal demo
    Run,
    /// Print menu item geometry and strip offsets
    Layout {
        /// Strip width in cells
        #[arg(short, long, default_value_t = 80)]
        width: u16,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Titles to lay out (defaults to the configured pages)
        titles: Vec<String>,
    },
    /// Check the [menu] options against a page count
    Validate {
        /// Page count (defaults to the configured pages)
        #[arg(short, long)]
        pages: Option<usize>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Layout {
            width,
            json,
            titles,
        }) => commands::layout::run(&config, width, json, titles),
        Some(Commands::Validate { pages }) => commands::validate::run(&config, pages),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

/// The terminal demo owns the screen, so its logs go to a file
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
