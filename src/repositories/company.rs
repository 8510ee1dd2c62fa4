//! # Company Repository
//!
//! This module contains the repository implementation for Company entities,
//! including the joined read that assembles a company with its invoices and
//! industries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, Unchanged,
};

use crate::error::RepositoryError;
use crate::mapper::{self, CompanyDetail};
use crate::models::rows::{CompanyInvoiceRow, CompanySummaryRow, IndustryNameRow};
use crate::models::{Company, Industry, company, company_industry, industry, invoice};
use crate::slug::slugify;

const NOT_FOUND: &str = "Company not found";
const ALREADY_EXISTS: &str = "The company already exists";
const UPDATE_NOT_FOUND: &str = "Update failed. Company not found.";

/// Request data for creating or updating a company
#[derive(Debug, Clone)]
pub struct CompanyInput {
    /// Display name; the code is derived from it on create
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Repository for Company database operations
pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    /// Create a new CompanyRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every company as `(code, name)`, ordered by code
    pub async fn list(&self) -> Result<Vec<CompanySummaryRow>, RepositoryError> {
        Company::find()
            .select_only()
            .column(company::Column::Code)
            .column(company::Column::Name)
            .order_by_asc(company::Column::Code)
            .into_model::<CompanySummaryRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get a company together with its invoices and industries
    pub async fn get_detail(&self, code: &str) -> Result<CompanyDetail, RepositoryError> {
        let rows = Company::find()
            .select_only()
            .column(company::Column::Code)
            .column(company::Column::Name)
            .column(company::Column::Description)
            .column(invoice::Column::Id)
            .column(invoice::Column::Amt)
            .column(invoice::Column::Paid)
            .column(invoice::Column::AddDate)
            .column(invoice::Column::PaidDate)
            .join(JoinType::LeftJoin, company::Relation::Invoices.def())
            .filter(company::Column::Code.eq(code))
            .order_by_asc(invoice::Column::Id)
            .into_model::<CompanyInvoiceRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if rows.is_empty() {
            return Err(RepositoryError::not_found(NOT_FOUND));
        }

        let industries = Industry::find()
            .select_only()
            .column(industry::Column::Industry)
            .join(JoinType::InnerJoin, industry::Relation::CompanyIndustries.def())
            .filter(company_industry::Column::CompCode.eq(code))
            .order_by_asc(industry::Column::Code)
            .into_model::<IndustryNameRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        mapper::company_detail(rows, industries).ok_or_else(|| RepositoryError::not_found(NOT_FOUND))
    }

    /// Create a company whose code is the slug of its name
    pub async fn create(&self, input: CompanyInput) -> Result<company::Model, RepositoryError> {
        let code = slugify(&input.name);
        if code.is_empty() {
            return Err(RepositoryError::validation_error(
                "Company name must contain at least one letter or digit",
            ));
        }

        let company = company::ActiveModel {
            code: Set(code),
            name: Set(input.name),
            description: Set(input.description),
        };

        let created = company
            .insert(self.db)
            .await
            .map_err(|err| RepositoryError::database_error(err).on_conflict(ALREADY_EXISTS))?;

        tracing::info!(code = %created.code, "Created company");
        Ok(created)
    }

    /// Replace the name and description of an existing company
    pub async fn update(
        &self,
        code: &str,
        input: CompanyInput,
    ) -> Result<company::Model, RepositoryError> {
        let company = company::ActiveModel {
            code: Unchanged(code.to_string()),
            name: Set(input.name),
            description: Set(input.description),
        };

        company.update(self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => RepositoryError::not_found(UPDATE_NOT_FOUND),
            other => RepositoryError::database_error(other).on_conflict(ALREADY_EXISTS),
        })
    }

    /// Delete a company; its invoices and industry links cascade
    pub async fn delete(&self, code: &str) -> Result<(), RepositoryError> {
        let result = Company::delete_by_id(code.to_string())
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(NOT_FOUND));
        }

        tracing::info!(code, "Deleted company");
        Ok(())
    }
}
