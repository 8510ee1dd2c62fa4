//! Company entity model
//!
//! This module contains the SeaORM entity model for the companies table.
//! A company is keyed by a slug derived from its display name.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "companies")]
#[schema(as = Company)]
pub struct Model {
    /// Slug identifier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    #[schema(example = "spacex")]
    pub code: String,

    /// Display name (unique)
    #[sea_orm(unique)]
    #[schema(example = "SpaceX")]
    pub name: String,

    /// Free-form description
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
    #[sea_orm(has_many = "super::company_industry::Entity")]
    CompanyIndustries,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl Related<super::company_industry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyIndustries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
