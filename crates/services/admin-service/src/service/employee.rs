//! Employee directory - the listing shown after login.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::Employee;

use crate::repository::EmployeeRepository;

#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// All employees, newest hire first
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;
}

pub struct EmployeeDirectory {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeDirectory {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeDirectory {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.find_all().await
    }
}
