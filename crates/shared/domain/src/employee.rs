//! Employee domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record shown in the employee list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    /// Image file name
    pub image: String,
    pub gender: String,
    pub hire_date: NaiveDate,
    pub mail_address: String,
    pub telephone: String,
    /// Monthly salary in yen
    pub salary: i32,
    pub dependents_count: i32,
}
