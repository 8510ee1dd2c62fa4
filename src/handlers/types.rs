//! # Common API Types
//!
//! Request payloads and response envelopes shared by the resource handlers.
//! Every success body wraps its resource under a single named key.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mapper::{CompanyDetail, IndustryGroup, InvoiceDetail};
use crate::models::rows::{CompanySummaryRow, InvoiceSummaryRow};
use crate::models::{company, company_industry, industry, invoice};

/// Request payload for creating or updating a company
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyRequest {
    /// Display name; the company code is derived from it on create
    #[schema(example = "Microsoft")]
    pub name: String,
    /// Optional free-form description
    #[schema(example = "Maker of windows OS")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Company as shown in the listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanySummary {
    #[schema(example = "msft")]
    pub code: String,
    #[schema(example = "Microsoft")]
    pub name: String,
}

impl From<CompanySummaryRow> for CompanySummary {
    fn from(row: CompanySummaryRow) -> Self {
        Self {
            code: row.code,
            name: row.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub company: company::Model,
}

/// Confirmation returned after deleting a company
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDeletedResponse {
    #[schema(example = "Company deleted")]
    pub message: String,
}

/// Request payload for creating an invoice
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    /// Code of an existing company
    #[schema(example = "msft")]
    pub comp_code: String,
    #[schema(example = 100.0)]
    pub amt: f64,
}

/// Request payload for updating an invoice
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateInvoiceRequest {
    #[schema(example = 100.0)]
    pub amt: f64,
    /// New payment state; `paid_date` follows it
    pub paid: bool,
}

/// Invoice as shown in the listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceSummary {
    pub id: i32,
    #[schema(example = "msft")]
    pub comp_code: String,
}

impl From<InvoiceSummaryRow> for InvoiceSummary {
    fn from(row: InvoiceSummaryRow) -> Self {
        Self {
            id: row.id,
            comp_code: row.comp_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceResponse {
    pub invoice: invoice::Model,
}

/// Confirmation returned after deleting an invoice
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDeletedResponse {
    #[schema(example = "Invoice deleted")]
    pub status: String,
}

/// Request payload for creating an industry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateIndustryRequest {
    #[schema(example = "tech")]
    pub code: String,
    #[schema(example = "Technology")]
    pub industry: String,
}

/// Request payload for linking a company to an industry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssociateCompanyRequest {
    #[schema(example = "msft")]
    pub comp_code: String,
}

/// Industries keyed by name, each with the codes of its companies
#[derive(Debug, Serialize, ToSchema)]
pub struct IndustriesResponse {
    #[schema(
        value_type = Vec<Object>,
        example = json!([{"Technology": {"companies": ["msft", "apple"]}}])
    )]
    pub industries: Vec<IndustryGroup>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndustryResponse {
    pub industry: industry::Model,
}

/// Newly created company/industry link
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndustryLinkResponse {
    pub industry: company_industry::Model,
}

/// Result of the database health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}
