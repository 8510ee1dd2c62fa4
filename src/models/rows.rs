//! Flat row shapes returned by the join queries.
//!
//! Each struct mirrors the column list of exactly one query in the
//! repository layer; the mapper turns them into nested resources.

use sea_orm::FromQueryResult;
use sea_orm::prelude::DateTimeUtc;

/// One row of `companies LEFT JOIN invoices`.
///
/// Invoice columns are null when the company has no invoices.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CompanyInvoiceRow {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub id: Option<i32>,
    pub amt: Option<f64>,
    pub paid: Option<bool>,
    pub add_date: Option<DateTimeUtc>,
    pub paid_date: Option<DateTimeUtc>,
}

/// Industry name linked to a company.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct IndustryNameRow {
    pub industry: String,
}

/// One row of `industries LEFT JOIN company_industries LEFT JOIN companies`.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct IndustryCompanyRow {
    pub industry: String,
    pub code: Option<String>,
}

/// One row of `invoices LEFT JOIN companies`.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct InvoiceCompanyRow {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTimeUtc,
    pub paid_date: Option<DateTimeUtc>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Projection used by the invoice listing.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct InvoiceSummaryRow {
    pub id: i32,
    pub comp_code: String,
}

/// Projection used by the company listing.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CompanySummaryRow {
    pub code: String,
    pub name: String,
}

/// Current payment state of an invoice, read before an update.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct PaymentStateRow {
    pub paid: bool,
    pub paid_date: Option<DateTimeUtc>,
}
