//! Command handlers.

use anyhow::Result;

use seedpress_core::{SETUP_FLAG_KEY, SeedBundle, SeedOutcome, SeedRunner};

use crate::Cli;
use crate::bootstrap::AppContext;

/// Run the idempotence gate over the bundle in `--data-dir`.
///
/// Returns `Ok` for every gate outcome, including a failed import: the
/// optimistic setup flag means a botched seed is logged, not fatal.
pub async fn handle_seed(ctx: &AppContext, cli: &Cli) -> Result<()> {
    let bundle = SeedBundle::load(&cli.data_dir)?;
    let runner = SeedRunner::new(&ctx.collaborators, bundle.uploads_dir());

    match runner.run(&bundle).await? {
        SeedOutcome::Imported => println!("Ready to go"),
        SeedOutcome::AlreadySeeded => println!("Seed data has already been imported. Skipping."),
        SeedOutcome::Failed => println!("Could not import seed data; see log output."),
    }
    Ok(())
}

/// Report the setup flag for the selected environment.
pub async fn handle_status(ctx: &AppContext, cli: &Cli) -> Result<()> {
    let flag = ctx.collaborators.settings.get(SETUP_FLAG_KEY).await?;
    let seeded = matches!(flag, Some(serde_json::Value::Bool(true)));

    if seeded {
        println!("Environment `{}` is seeded.", cli.environment);
    } else {
        println!("Environment `{}` has not been seeded.", cli.environment);
    }
    Ok(())
}
