//! Migration: Create administrators table.
//!
//! `mail_address` carries a unique index so two concurrent registrations
//! with the same address cannot both be inserted.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Administrators::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Administrators::Name).string().not_null())
                    .col(
                        ColumnDef::new(Administrators::MailAddress)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Administrators::Password).string().not_null())
                    .col(
                        ColumnDef::new(Administrators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_administrators_mail_address")
                    .table(Administrators::Table)
                    .col(Administrators::MailAddress)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Administrators::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Administrators {
    Table,
    Id,
    Name,
    MailAddress,
    Password,
    CreatedAt,
}
