//! Administrator Service Library
//!
//! Persistence, workflows and session management for administrator
//! registration and login, plus the employee directory shown after login.
//! The HTTP layer lives in the `web` crate.

pub mod infra;
pub mod repository;
pub mod service;
pub mod session;

use common::{AppResult, DatabaseConfig};
use tracing::{info, warn};

use crate::infra::Database;

pub use crate::infra::MigrateAction;

/// Run a migration command against the configured database.
pub async fn run_migrations(config: &DatabaseConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::open(config).await?;

    match action {
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            warn!("Dropping all tables and re-applying migrations");
            db.migrate(action).await?;
        }
        MigrateAction::Up | MigrateAction::Down => {
            db.migrate(action).await?;
            info!(?action, "Migration finished");
        }
    }

    Ok(())
}
