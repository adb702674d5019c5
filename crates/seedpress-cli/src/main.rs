//! CLI entry point.
//!
//! Exit codes: 0 on normal completion, including the already-seeded skip;
//! 1 on any uncaught top-level error (unreadable bundle, unavailable
//! database).

use clap::Parser;

use seedpress_cli::{Cli, Commands, bootstrap, commands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "seedpress failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap::bootstrap(&cli).await?;
    let command = cli.command.clone().unwrap_or(Commands::Seed);

    match command {
        Commands::Seed => commands::handle_seed(&ctx, &cli).await,
        Commands::Status => commands::handle_status(&ctx, &cli).await,
    }
}
