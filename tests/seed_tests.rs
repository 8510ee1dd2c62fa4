//! Integration tests for sample data seeding.

#[path = "test_utils/mod.rs"]
mod test_utils;

use anyhow::Result;
use axum::http::StatusCode;
use biztime::seeds::seed_sample_data;
use serde_json::json;
use test_utils::{send, setup_test_db, test_app};

#[tokio::test]
async fn test_seed_sample_data_populates_every_table() -> Result<()> {
    let db = setup_test_db().await?;

    seed_sample_data(&db).await?;

    let (status, companies) = send(test_app(&db), "GET", "/companies", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        companies,
        json!({"companies": [
            {"code": "apple", "name": "Apple Computer"},
            {"code": "ibm", "name": "IBM"}
        ]})
    );

    let (_, invoices) = send(test_app(&db), "GET", "/invoices", None).await?;
    assert_eq!(invoices["invoices"].as_array().map(Vec::len), Some(4));

    let (_, industries) = send(test_app(&db), "GET", "/industries", None).await?;
    assert_eq!(
        industries,
        json!({"industries": [
            {"Accounting": {"companies": ["ibm"]}},
            {"Technology": {"companies": ["apple", "ibm"]}}
        ]})
    );

    let (_, apple) = send(test_app(&db), "GET", "/companies/apple", None).await?;
    let paid: Vec<_> = apple["company"]["invoices"]
        .as_array()
        .expect("invoices array")
        .iter()
        .filter(|invoice| invoice["paid"] == json!(true))
        .collect();
    assert_eq!(paid.len(), 1);
    assert!(paid[0]["paid_date"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_seeding_twice_skips_existing_rows() -> Result<()> {
    let db = setup_test_db().await?;

    seed_sample_data(&db).await?;
    seed_sample_data(&db).await?;

    let (_, invoices) = send(test_app(&db), "GET", "/invoices", None).await?;
    assert_eq!(invoices["invoices"].as_array().map(Vec::len), Some(4));
    Ok(())
}
