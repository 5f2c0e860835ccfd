//! CLI entry point.
//!
//! Wires the closet via `bootstrap` and routes each command to its handler.
//! Errors are printed once and turned into sysexits-style exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use closet_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig {
        closet_dir: cli.closet_dir,
    })?;

    match command {
        Commands::Capture { image, services } => {
            handlers::capture::execute(&ctx, &image, &services).await?;
        }
        Commands::List { json } => {
            handlers::list::execute(&ctx, json).await?;
        }
        Commands::Remove { entry, force } => {
            handlers::remove::execute(&ctx, &entry, force).await?;
        }
        Commands::Export { entry, dest } => {
            handlers::export::execute(&ctx, &entry, &dest).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                eprintln!("Error: {cli_err}");
                cli_err.exit_code()
            }
            None => {
                eprintln!("Error: {err:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
