//! Administrator database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Administrator;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "administrators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub mail_address: String,
    pub password: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Administrator {
    fn from(model: Model) -> Self {
        Administrator {
            id: model.id,
            name: model.name,
            mail_address: model.mail_address,
            password: model.password,
            created_at: model.created_at,
        }
    }
}
