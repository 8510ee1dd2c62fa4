//! Invoice entity model
//!
//! This module contains the SeaORM entity model for the invoices table.
//! Every invoice belongs to exactly one company through `comp_code`.

use super::company::Entity as Company;
use chrono::{DateTime, Utc};
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Invoice entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "invoices")]
#[schema(as = Invoice)]
pub struct Model {
    /// Generated identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Code of the owning company
    #[schema(example = "msft")]
    pub comp_code: String,

    /// Invoice amount
    #[schema(example = 100.0)]
    pub amt: f64,

    /// Whether the invoice has been paid
    pub paid: bool,

    /// Creation timestamp, assigned by the server
    pub add_date: DateTime<Utc>,

    /// Set when the invoice becomes paid, null while unpaid
    pub paid_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Company",
        from = "Column::CompCode",
        to = "super::company::Column::Code",
        on_delete = "Cascade"
    )]
    Company,
}

impl Related<Company> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
