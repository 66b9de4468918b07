//! Migration: Create employees table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Image).string().not_null())
                    .col(ColumnDef::new(Employees::Gender).string().not_null())
                    .col(ColumnDef::new(Employees::HireDate).date().not_null())
                    .col(ColumnDef::new(Employees::MailAddress).string().not_null())
                    .col(ColumnDef::new(Employees::Telephone).string().not_null())
                    .col(ColumnDef::new(Employees::Salary).integer().not_null())
                    .col(
                        ColumnDef::new(Employees::DependentsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // The list view sorts by hire date
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_hire_date")
                    .table(Employees::Table)
                    .col(Employees::HireDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Image,
    Gender,
    HireDate,
    MailAddress,
    Telephone,
    Salary,
    DependentsCount,
}
