//! # Invoice Repository
//!
//! This module contains the repository implementation for Invoice entities.
//! Updating an invoice maintains `paid_date` from the previous payment state;
//! the read and the write are separate statements.

use chrono::Utc;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, NotSet, QueryOrder,
    QuerySelect, RelationTrait, Set, Unchanged,
};

use crate::error::RepositoryError;
use crate::mapper::{self, InvoiceDetail};
use crate::models::rows::{InvoiceCompanyRow, InvoiceSummaryRow, PaymentStateRow};
use crate::models::{Invoice, company, invoice};

const COMPANY_NOT_FOUND: &str = "Company was not found.";
const DELETE_NOT_FOUND: &str = "Invoice not found.";

/// Request data for creating an invoice
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Request data for updating an invoice
#[derive(Debug, Clone)]
pub struct InvoiceUpdate {
    pub amt: f64,
    pub paid: bool,
}

/// Computes the `paid_date` an invoice should carry after an update.
///
/// Paying a previously unpaid invoice stamps `now`; marking it unpaid clears
/// the date; anything else keeps the stored value.
pub fn next_paid_date(
    current: &PaymentStateRow,
    paid: bool,
    now: DateTimeUtc,
) -> Option<DateTimeUtc> {
    if !paid {
        None
    } else if !current.paid {
        Some(now)
    } else {
        current.paid_date
    }
}

/// Repository for Invoice database operations
pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    /// Create a new InvoiceRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every invoice as `(id, comp_code)`, ordered by id
    pub async fn list(&self) -> Result<Vec<InvoiceSummaryRow>, RepositoryError> {
        Invoice::find()
            .select_only()
            .column(invoice::Column::Id)
            .column(invoice::Column::CompCode)
            .order_by_asc(invoice::Column::Id)
            .into_model::<InvoiceSummaryRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get an invoice together with its company
    pub async fn get_detail(&self, id: i32) -> Result<InvoiceDetail, RepositoryError> {
        let row = Invoice::find_by_id(id)
            .select_only()
            .column(invoice::Column::Id)
            .column(invoice::Column::Amt)
            .column(invoice::Column::Paid)
            .column(invoice::Column::AddDate)
            .column(invoice::Column::PaidDate)
            .column(company::Column::Code)
            .column(company::Column::Name)
            .column(company::Column::Description)
            .join(JoinType::LeftJoin, invoice::Relation::Company.def())
            .into_model::<InvoiceCompanyRow>()
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::not_found(format!("Invoice was not found: {id}")))?;

        Ok(mapper::invoice_detail(row))
    }

    /// Create an unpaid invoice for an existing company
    pub async fn create(&self, input: NewInvoice) -> Result<invoice::Model, RepositoryError> {
        let invoice = invoice::ActiveModel {
            id: NotSet,
            comp_code: Set(input.comp_code),
            amt: Set(input.amt),
            paid: Set(false),
            add_date: Set(Utc::now()),
            paid_date: Set(None),
        };

        let created = invoice.insert(self.db).await.map_err(|err| {
            RepositoryError::database_error(err).on_missing_reference(COMPANY_NOT_FOUND)
        })?;

        tracing::info!(id = created.id, comp_code = %created.comp_code, "Created invoice");
        Ok(created)
    }

    /// Update amount and payment state, maintaining `paid_date`
    pub async fn update(
        &self,
        id: i32,
        input: InvoiceUpdate,
    ) -> Result<invoice::Model, RepositoryError> {
        let not_found = || RepositoryError::not_found(format!("Invoice cannot be found: {id}"));

        let current = Invoice::find_by_id(id)
            .select_only()
            .column(invoice::Column::Paid)
            .column(invoice::Column::PaidDate)
            .into_model::<PaymentStateRow>()
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(not_found)?;

        let invoice = invoice::ActiveModel {
            id: Unchanged(id),
            amt: Set(input.amt),
            paid: Set(input.paid),
            paid_date: Set(next_paid_date(&current, input.paid, Utc::now())),
            ..Default::default()
        };

        invoice.update(self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => not_found(),
            other => RepositoryError::database_error(other).on_missing_reference(COMPANY_NOT_FOUND),
        })
    }

    /// Delete an invoice
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = Invoice::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(DELETE_NOT_FOUND));
        }

        tracing::info!(id, "Deleted invoice");
        Ok(())
    }
}
