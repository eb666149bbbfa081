use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio_util::sync::CancellationToken;

use calculator_server::{AppConfig, CliArgs, logging, server, shutdown};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - web calculator over two integer operands
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - web calculator over two integer operands")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let args = CliArgs {
        port: cli.port,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    // Held until exit so the file writer flushes
    let _log_guard = logging::init_logging(&config.logging)?;

    tracing::info!("Calculator Server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_json_pretty()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.server.bind_addr()?;
    // Builds the router to surface module config errors; nothing is served.
    let _router = server::build_router(config)?;
    println!("Configuration is valid");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let cancel = CancellationToken::new();
    shutdown::cancel_on_signal(cancel.clone());

    let router = server::build_router(&config)?;
    server::serve(&config.server, router, cancel).await
}
