//! # Row-to-Resource Mapping
//!
//! Turns the flat row sets produced by the join queries into the nested
//! resources returned by the API:
//!
//! - company with its invoices and industries ([`company_detail`])
//! - industries with the codes of their companies ([`group_industries`])
//! - invoice with its company ([`invoice_detail`])
//!
//! The mapper never fabricates a placeholder resource: an empty primary row
//! set yields `None` and the caller reports "not found".

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::company;
use crate::models::rows::{CompanyInvoiceRow, IndustryCompanyRow, IndustryNameRow, InvoiceCompanyRow};

/// Invoice as embedded in a company detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyInvoice {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

/// Industry name as embedded in a company detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompanyIndustryName {
    #[schema(example = "Technology")]
    pub industry: String,
}

impl From<IndustryNameRow> for CompanyIndustryName {
    fn from(row: IndustryNameRow) -> Self {
        Self {
            industry: row.industry,
        }
    }
}

/// Company with its invoices and industries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetail {
    #[schema(example = "msft")]
    pub code: String,
    #[schema(example = "Microsoft")]
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<CompanyInvoice>,
    pub industries: Vec<CompanyIndustryName>,
}

/// Invoice with its owning company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub company: Option<company::Model>,
}

/// Companies grouped under one industry name.
///
/// Serializes as a single-key object: `{"<industry>": {"companies": [...]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryGroup {
    pub industry: String,
    pub companies: Vec<String>,
}

impl Serialize for IndustryGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Companies<'a> {
            companies: &'a [String],
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.industry,
            &Companies {
                companies: &self.companies,
            },
        )?;
        map.end()
    }
}

/// Assembles a company detail from its invoice rows and industry rows.
///
/// `rows` come from `companies LEFT JOIN invoices`, so a company without
/// invoices arrives as a single row whose invoice columns are null; such rows
/// contribute nothing to `invoices`. Returns `None` when `rows` is empty.
pub fn company_detail(
    rows: Vec<CompanyInvoiceRow>,
    industries: Vec<IndustryNameRow>,
) -> Option<CompanyDetail> {
    let first = rows.first()?;
    let code = first.code.clone();
    let name = first.name.clone();
    let description = first.description.clone();

    let invoices = rows
        .into_iter()
        .filter_map(|row| {
            Some(CompanyInvoice {
                id: row.id?,
                amt: row.amt?,
                paid: row.paid?,
                add_date: row.add_date?,
                paid_date: row.paid_date,
            })
        })
        .collect();

    Some(CompanyDetail {
        code,
        name,
        description,
        invoices,
        industries: industries.into_iter().map(Into::into).collect(),
    })
}

/// Groups `(industry, company code)` rows by industry name.
///
/// Industries keep the order in which they are first seen, as do the
/// companies within each industry. Duplicate codes are dropped and null codes
/// (industries without companies) produce an empty list.
pub fn group_industries<I>(rows: I) -> Vec<IndustryGroup>
where
    I: IntoIterator<Item = IndustryCompanyRow>,
{
    let mut groups: Vec<IndustryGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = match positions.get(&row.industry) {
            Some(&slot) => slot,
            None => {
                groups.push(IndustryGroup {
                    industry: row.industry.clone(),
                    companies: Vec::new(),
                });
                positions.insert(row.industry, groups.len() - 1);
                groups.len() - 1
            }
        };

        if let Some(code) = row.code {
            let companies = &mut groups[slot].companies;
            if !companies.contains(&code) {
                companies.push(code);
            }
        }
    }

    groups
}

/// Assembles an invoice detail from one `invoices LEFT JOIN companies` row.
pub fn invoice_detail(row: InvoiceCompanyRow) -> InvoiceDetail {
    let company = row.code.map(|code| company::Model {
        code,
        name: row.name.unwrap_or_default(),
        description: row.description,
    });

    InvoiceDetail {
        id: row.id,
        amt: row.amt,
        paid: row.paid,
        add_date: row.add_date,
        paid_date: row.paid_date,
        company,
    }
}
