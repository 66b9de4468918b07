//! Connection pool and schema management.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};
use tracing::info;

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Pooled connection to the administrators/employees database.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

/// Schema change requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

impl Database {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::open(config).await?;
        Migrator::up(&db.connection, None).await?;
        info!("Database connected and migrations applied");
        Ok(db)
    }

    /// Open the pool without touching the schema.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        Ok(Self {
            connection: SeaDatabase::connect(options).await?,
        })
    }

    /// Handle for the stores. Cheap to clone.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply a schema change. `Status` changes nothing.
    pub async fn migrate(&self, action: MigrateAction) -> Result<(), DbErr> {
        match action {
            MigrateAction::Up => Migrator::up(&self.connection, None).await,
            MigrateAction::Down => Migrator::down(&self.connection, Some(1)).await,
            MigrateAction::Fresh => Migrator::fresh(&self.connection).await,
            MigrateAction::Status => Ok(()),
        }
    }

    /// Every known migration with whether it has been applied, oldest first.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        Ok(Migrator::get_migration_with_status(&self.connection)
            .await?
            .into_iter()
            .map(|m| {
                let applied = matches!(m.status(), MigrationStatus::Applied);
                (m.name().to_string(), applied)
            })
            .collect())
    }
}
