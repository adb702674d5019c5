//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: database pool, SQLite collaborators, nothing else. Command
//! handlers receive the composed context and delegate to the core services.

use anyhow::Result;

use seedpress_core::Collaborators;
use seedpress_db::{build_collaborators, setup_database};

use crate::Cli;

/// Fully composed application context for CLI commands.
pub struct AppContext {
    pub collaborators: Collaborators,
}

/// Open the database and wire the SQLite collaborators.
pub async fn bootstrap(cli: &Cli) -> Result<AppContext> {
    let pool = setup_database(&cli.database).await?;
    let collaborators = build_collaborators(pool, &cli.environment, cli.uploads_dir.clone());
    Ok(AppContext { collaborators })
}
