//! Administrator repository - the credential store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use super::entities::administrator::{self, ActiveModel, Entity as AdministratorEntity};
use common::{AppError, AppResult};
use domain::{Administrator, NewAdministrator};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Administrator repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdministratorRepository: Send + Sync {
    /// Find administrator by mail address
    async fn find_by_mail_address(&self, mail_address: &str) -> AppResult<Option<Administrator>>;

    /// Find administrator whose mail address and password both match exactly.
    ///
    /// Passwords are compared as stored (plain text).
    async fn find_by_credentials(
        &self,
        mail_address: &str,
        password: &str,
    ) -> AppResult<Option<Administrator>>;

    /// Insert a new administrator.
    ///
    /// Returns `AppError::Conflict` when the mail address is already taken,
    /// as enforced by the store's unique index.
    async fn insert(&self, administrator: NewAdministrator) -> AppResult<Administrator>;
}

/// SeaORM implementation of AdministratorRepository
pub struct AdministratorStore {
    db: DatabaseConnection,
}

impl AdministratorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdministratorRepository for AdministratorStore {
    async fn find_by_mail_address(&self, mail_address: &str) -> AppResult<Option<Administrator>> {
        let result = AdministratorEntity::find()
            .filter(administrator::Column::MailAddress.eq(mail_address))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Administrator::from))
    }

    async fn find_by_credentials(
        &self,
        mail_address: &str,
        password: &str,
    ) -> AppResult<Option<Administrator>> {
        let result = AdministratorEntity::find()
            .filter(administrator::Column::MailAddress.eq(mail_address))
            .filter(administrator::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Administrator::from))
    }

    async fn insert(&self, administrator: NewAdministrator) -> AppResult<Administrator> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(administrator.name),
            mail_address: Set(administrator.mail_address),
            password: Set(administrator.password),
            created_at: Set(chrono::Utc::now()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(Administrator::from(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::conflict("Administrator"))
            }
            Err(err) => Err(AppError::from(err)),
        }
    }
}
