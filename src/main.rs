//! NIST-800 compliance dashboard backend entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use compliance_backend::config::Config;
use compliance_backend::dashboard;
use compliance_backend::server::Server;

/// NIST-800 compliance dashboard backend.
#[derive(Parser, Debug)]
#[command(name = "compliance-backend")]
#[command(about = "HTTP backend for the NIST-800 compliance dashboard")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("compliance_backend=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run) | None => cmd_run().await,
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_run() -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let port = config.listen_port();
    info!("Configuration loaded successfully");
    info!("Listen port: {}", port);

    // A bind failure is fatal: surface it and exit non-zero.
    let server = Server::bind(port, dashboard::router()).await.map_err(|e| {
        error!("Failed to start server: {}", e);
        e
    })?;

    server.serve().await?;
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("COMPLIANCE BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    match config.port.as_deref() {
        Some(raw) => println!("  PORT: {} -> listening on {}", raw, config.listen_port()),
        None => println!("  PORT: unset -> listening on {} (default)", config.listen_port()),
    }
    println!("  Log Level: {}", config.rust_log);
    println!("  Bind Address: 0.0.0.0");
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
