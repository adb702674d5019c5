//! The idempotence gate around the importer.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use super::{SeedError, SeedImporter};
use crate::bundle::SeedBundle;
use crate::ports::{Collaborators, SettingsStore};

/// Settings key recording that seeding has run for this environment.
pub const SETUP_FLAG_KEY: &str = "initHasRun";

/// What a gate invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// First run: the bundle was imported.
    Imported,
    /// The setup flag was already set; nothing was done.
    AlreadySeeded,
    /// First run, but the import failed. The flag stays set, so the run
    /// will not be retried.
    Failed,
}

/// Runs the importer at most once per settings namespace.
///
/// The setup flag is written immediately after it is read, before the import
/// attempt: a crash mid-import still marks the run as done. This
/// at-most-one-attempt policy is deliberate; re-seeding requires clearing
/// the flag by hand.
///
/// This is the single entry point for both the CLI and embedding
/// applications, which call [`SeedRunner::run`] from their own startup hook.
pub struct SeedRunner {
    settings: Arc<dyn SettingsStore>,
    importer: SeedImporter,
}

impl SeedRunner {
    /// Compose a runner over the collaborators, reading bundle media from
    /// `uploads_dir`.
    pub fn new(collaborators: &Collaborators, uploads_dir: PathBuf) -> Self {
        Self {
            settings: Arc::clone(&collaborators.settings),
            importer: SeedImporter::new(collaborators, uploads_dir),
        }
    }

    /// Check the gate and import on first run.
    ///
    /// Importer errors are logged and reported as [`SeedOutcome::Failed`],
    /// never returned: a botched seed must not take the host process down.
    /// Settings-store errors do propagate; without the flag the gate cannot
    /// make any promise.
    pub async fn run(&self, bundle: &SeedBundle) -> Result<SeedOutcome, SeedError> {
        if !self.is_first_run().await? {
            info!("seed data has already been imported, skipping");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        info!("seeding blog data (authors + posts)");
        match self.importer.import(bundle).await {
            Ok(()) => {
                info!("seed complete");
                Ok(SeedOutcome::Imported)
            }
            Err(err) => {
                error!(error = %err, "could not import seed data");
                Ok(SeedOutcome::Failed)
            }
        }
    }

    /// Read the setup flag and set it, in that order, on every check.
    async fn is_first_run(&self) -> Result<bool, SeedError> {
        let flag = self.settings.get(SETUP_FLAG_KEY).await?;
        self.settings
            .set(SETUP_FLAG_KEY, serde_json::Value::Bool(true))
            .await?;
        Ok(!matches!(flag, Some(serde_json::Value::Bool(true))))
    }
}
