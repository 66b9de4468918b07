//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub gender: String,
    pub hire_date: Date,
    pub mail_address: String,
    pub telephone: String,
    pub salary: i32,
    pub dependents_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            image: model.image,
            gender: model.gender,
            hire_date: model.hire_date,
            mail_address: model.mail_address,
            telephone: model.telephone,
            salary: model.salary,
            dependents_count: model.dependents_count,
        }
    }
}
