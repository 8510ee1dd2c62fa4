//! Sample data seeding
//!
//! Inserts two companies with their invoices, two industries and the links
//! between them. Rows that already exist are left untouched, so seeding can
//! be repeated safely.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use crate::models::{Company, CompanyIndustry, Industry, company, company_industry, industry, invoice};

struct SampleCompany {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    /// `(amount, paid)` for each invoice created with the company
    invoices: &'static [(f64, bool)],
}

const COMPANIES: &[SampleCompany] = &[
    SampleCompany {
        code: "apple",
        name: "Apple Computer",
        description: "Maker of OSX.",
        invoices: &[(100.0, false), (200.0, false), (300.0, true)],
    },
    SampleCompany {
        code: "ibm",
        name: "IBM",
        description: "Big blue.",
        invoices: &[(400.0, false)],
    },
];

const INDUSTRIES: &[(&str, &str)] = &[("acct", "Accounting"), ("tech", "Technology")];

const LINKS: &[(&str, &str)] = &[("tech", "apple"), ("tech", "ibm"), ("acct", "ibm")];

/// Seeds the sample dataset
///
/// Invoices are only created together with a newly inserted company.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<()> {
    for sample in COMPANIES {
        if Company::find_by_id(sample.code).one(db).await?.is_some() {
            log::info!("Company '{}' already exists, skipping", sample.code);
            continue;
        }

        log::info!("Creating company: {}", sample.code);
        company::ActiveModel {
            code: Set(sample.code.to_string()),
            name: Set(sample.name.to_string()),
            description: Set(Some(sample.description.to_string())),
        }
        .insert(db)
        .await?;

        for &(amt, paid) in sample.invoices {
            let now = Utc::now();
            invoice::ActiveModel {
                id: NotSet,
                comp_code: Set(sample.code.to_string()),
                amt: Set(amt),
                paid: Set(paid),
                add_date: Set(now),
                paid_date: Set(paid.then_some(now)),
            }
            .insert(db)
            .await?;
        }
        log::info!(
            "Created {} invoice(s) for company: {}",
            sample.invoices.len(),
            sample.code
        );
    }

    for &(code, name) in INDUSTRIES {
        if Industry::find_by_id(code).one(db).await?.is_some() {
            log::info!("Industry '{}' already exists, skipping", code);
            continue;
        }

        log::info!("Creating industry: {}", code);
        industry::ActiveModel {
            code: Set(code.to_string()),
            industry: Set(name.to_string()),
        }
        .insert(db)
        .await?;
    }

    for &(ind_code, comp_code) in LINKS {
        if CompanyIndustry::find_by_id((ind_code.to_string(), comp_code.to_string()))
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }

        company_industry::ActiveModel {
            ind_code: Set(ind_code.to_string()),
            comp_code: Set(comp_code.to_string()),
        }
        .insert(db)
        .await?;
        log::info!("Linked company '{}' to industry '{}'", comp_code, ind_code);
    }

    log::info!("Sample data seeding completed");
    Ok(())
}
