//! # Industry Repository
//!
//! Industries and their many-to-many links to companies.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, JoinType, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

use crate::error::RepositoryError;
use crate::mapper::{self, IndustryGroup};
use crate::models::rows::IndustryCompanyRow;
use crate::models::{Industry, company, company_industry, industry};

/// Repository for Industry database operations
pub struct IndustryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IndustryRepository<'a> {
    /// Create a new IndustryRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List industries with the codes of the companies linked to each
    pub async fn list_grouped(&self) -> Result<Vec<IndustryGroup>, RepositoryError> {
        let rows = Industry::find()
            .select_only()
            .column(industry::Column::Industry)
            .column(company::Column::Code)
            .join(JoinType::LeftJoin, industry::Relation::CompanyIndustries.def())
            .join(JoinType::LeftJoin, company_industry::Relation::Company.def())
            .order_by_asc(industry::Column::Code)
            .order_by_asc(company::Column::Code)
            .into_model::<IndustryCompanyRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(mapper::group_industries(rows))
    }

    /// Create an industry
    pub async fn create(
        &self,
        code: String,
        name: String,
    ) -> Result<industry::Model, RepositoryError> {
        let industry = industry::ActiveModel {
            code: Set(code),
            industry: Set(name),
        };

        let created = industry.insert(self.db).await.map_err(|err| {
            RepositoryError::database_error(err).on_conflict("The industry already exists")
        })?;

        tracing::info!(code = %created.code, "Created industry");
        Ok(created)
    }

    /// Link a company to an industry
    pub async fn associate(
        &self,
        ind_code: String,
        comp_code: String,
    ) -> Result<company_industry::Model, RepositoryError> {
        let link = company_industry::ActiveModel {
            ind_code: Set(ind_code),
            comp_code: Set(comp_code),
        };

        let created = link.insert(self.db).await.map_err(|err| {
            RepositoryError::database_error(err)
                .on_missing_reference("Company or industry not found.")
                .on_conflict("The company already belongs to this industry")
        })?;

        tracing::info!(
            ind_code = %created.ind_code,
            comp_code = %created.comp_code,
            "Linked company to industry"
        );
        Ok(created)
    }
}
