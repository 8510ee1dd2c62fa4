//! Industry entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Industry entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "industries")]
#[schema(as = Industry)]
pub struct Model {
    /// Unique industry code (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    #[schema(example = "tech")]
    pub code: String,

    /// Display name
    #[schema(example = "Technology")]
    pub industry: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_industry::Entity")]
    CompanyIndustries,
}

impl Related<super::company_industry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyIndustries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
