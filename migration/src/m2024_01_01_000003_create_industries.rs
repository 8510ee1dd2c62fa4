//! Migration to create the industries table and the company/industry
//! association table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Industries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Industries::Code)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Industries::Industry).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Each (company, industry) pair is linked at most once
        manager
            .create_table(
                Table::create()
                    .table(CompanyIndustries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CompanyIndustries::CompCode).text().not_null())
                    .col(ColumnDef::new(CompanyIndustries::IndCode).text().not_null())
                    .primary_key(
                        Index::create()
                            .col(CompanyIndustries::CompCode)
                            .col(CompanyIndustries::IndCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_industries_comp_code")
                            .from(CompanyIndustries::Table, CompanyIndustries::CompCode)
                            .to(Companies::Table, Companies::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_industries_ind_code")
                            .from(CompanyIndustries::Table, CompanyIndustries::IndCode)
                            .to(Industries::Table, Industries::Code)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyIndustries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Industries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Industries {
    Table,
    Code,
    Industry,
}

#[derive(DeriveIden)]
enum CompanyIndustries {
    Table,
    CompCode,
    IndCode,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Code,
}
