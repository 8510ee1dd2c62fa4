//! Company/industry association entity
//!
//! Links one company to one industry; the pair is the primary key.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Association between a company and an industry
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "company_industries")]
#[schema(as = CompanyIndustry)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[schema(example = "tech")]
    pub ind_code: String,

    #[sea_orm(primary_key, auto_increment = false)]
    #[schema(example = "msft")]
    pub comp_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompCode",
        to = "super::company::Column::Code",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::industry::Entity",
        from = "Column::IndCode",
        to = "super::industry::Column::Code",
        on_delete = "Cascade"
    )]
    Industry,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::industry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Industry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
