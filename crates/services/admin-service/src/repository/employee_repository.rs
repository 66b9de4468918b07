//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::employee::{self, Entity as EmployeeEntity};
use common::{AppError, AppResult};
use domain::Employee;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees, most recently hired first
    async fn find_all(&self) -> AppResult<Vec<Employee>>;
}

/// SeaORM implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_desc(employee::Column::HireDate)
            .order_by_asc(employee::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }
}
