//! Database migrations for the BizTime API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2024_01_01_000001_create_companies;
mod m2024_01_01_000002_create_invoices;
mod m2024_01_01_000003_create_industries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2024_01_01_000001_create_companies::Migration),
            Box::new(m2024_01_01_000002_create_invoices::Migration),
            Box::new(m2024_01_01_000003_create_industries::Migration),
        ]
    }
}
