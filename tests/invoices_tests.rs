//! Integration tests for the /invoices endpoints.

#[path = "test_utils/mod.rs"]
mod test_utils;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use test_utils::{insert_company, insert_invoice, send, setup_test_db, test_app};

#[tokio::test]
async fn test_list_invoices_returns_id_and_company_code() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;
    insert_company(&db, "ibm", "IBM", None).await?;
    let first = insert_invoice(&db, "msft", 100.0).await?;
    let second = insert_invoice(&db, "ibm", 200.0).await?;

    let (status, body) = send(test_app(&db), "GET", "/invoices", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"invoices": [
            {"id": first.id, "comp_code": "msft"},
            {"id": second.id, "comp_code": "ibm"}
        ]})
    );
    Ok(())
}

#[tokio::test]
async fn test_get_invoice_nests_company() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", Some("Maker of windows OS")).await?;
    let invoice = insert_invoice(&db, "msft", 100.0).await?;

    let uri = format!("/invoices/{}", invoice.id);
    let (status, body) = send(test_app(&db), "GET", &uri, None).await?;

    assert_eq!(status, StatusCode::OK);
    let detail = &body["invoice"];
    assert_eq!(detail["id"], json!(invoice.id));
    assert_eq!(detail["amt"].as_f64(), Some(100.0));
    assert_eq!(detail["paid"], json!(false));
    assert!(detail["paid_date"].is_null());
    assert!(detail.get("comp_code").is_none());
    assert_eq!(
        detail["company"],
        json!({"code": "msft", "name": "Microsoft", "description": "Maker of windows OS"})
    );
    Ok(())
}

#[tokio::test]
async fn test_get_missing_invoice_is_404() -> Result<()> {
    let db = setup_test_db().await?;

    let (status, body) = send(test_app(&db), "GET", "/invoices/999", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"message": "Invoice was not found: 999", "status": 404}})
    );
    Ok(())
}

#[tokio::test]
async fn test_create_invoice_starts_unpaid() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;

    let (status, body) = send(
        test_app(&db),
        "POST",
        "/invoices",
        Some(json!({"comp_code": "msft", "amt": 450})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    let invoice = &body["invoice"];
    assert!(invoice["id"].is_i64());
    assert_eq!(invoice["comp_code"], "msft");
    assert_eq!(invoice["amt"].as_f64(), Some(450.0));
    assert_eq!(invoice["paid"], json!(false));
    assert!(invoice["add_date"].is_string());
    assert!(invoice["paid_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_create_invoice_for_missing_company_is_404() -> Result<()> {
    let db = setup_test_db().await?;

    let (status, body) = send(
        test_app(&db),
        "POST",
        "/invoices",
        Some(json!({"comp_code": "nope", "amt": 10})),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"message": "Company was not found.", "status": 404}})
    );
    Ok(())
}

#[tokio::test]
async fn test_paying_invoice_stamps_paid_date() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;
    let invoice = insert_invoice(&db, "msft", 100.0).await?;
    let uri = format!("/invoices/{}", invoice.id);

    let (status, body) = send(
        test_app(&db),
        "PUT",
        &uri,
        Some(json!({"amt": 150, "paid": true})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["invoice"];
    assert_eq!(updated["id"], json!(invoice.id));
    assert_eq!(updated["comp_code"], "msft");
    assert_eq!(updated["amt"].as_f64(), Some(150.0));
    assert_eq!(updated["paid"], json!(true));
    assert!(updated["paid_date"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_repaying_keeps_original_paid_date() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;
    let invoice = insert_invoice(&db, "msft", 100.0).await?;
    let uri = format!("/invoices/{}", invoice.id);

    let (_, first) = send(
        test_app(&db),
        "PUT",
        &uri,
        Some(json!({"amt": 100, "paid": true})),
    )
    .await?;
    let (status, second) = send(
        test_app(&db),
        "PUT",
        &uri,
        Some(json!({"amt": 120, "paid": true})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(first["invoice"]["paid_date"].is_string());
    assert_eq!(second["invoice"]["paid_date"], first["invoice"]["paid_date"]);
    assert_eq!(second["invoice"]["amt"].as_f64(), Some(120.0));
    Ok(())
}

#[tokio::test]
async fn test_unpaying_clears_paid_date() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;
    let invoice = insert_invoice(&db, "msft", 100.0).await?;
    let uri = format!("/invoices/{}", invoice.id);

    send(
        test_app(&db),
        "PUT",
        &uri,
        Some(json!({"amt": 100, "paid": true})),
    )
    .await?;
    let (status, body) = send(
        test_app(&db),
        "PUT",
        &uri,
        Some(json!({"amt": 100, "paid": false})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["paid"], json!(false));
    assert!(body["invoice"]["paid_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_update_missing_invoice_is_404() -> Result<()> {
    let db = setup_test_db().await?;

    let (status, body) = send(
        test_app(&db),
        "PUT",
        "/invoices/999",
        Some(json!({"amt": 1, "paid": false})),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Invoice cannot be found: 999");
    Ok(())
}

#[tokio::test]
async fn test_delete_invoice() -> Result<()> {
    let db = setup_test_db().await?;
    insert_company(&db, "msft", "Microsoft", None).await?;
    let invoice = insert_invoice(&db, "msft", 100.0).await?;
    let uri = format!("/invoices/{}", invoice.id);

    let (status, body) = send(test_app(&db), "DELETE", &uri, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "Invoice deleted"}));

    let (status, _) = send(test_app(&db), "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_invoice_is_404() -> Result<()> {
    let db = setup_test_db().await?;

    let (status, body) = send(test_app(&db), "DELETE", "/invoices/999", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": {"message": "Invoice not found.", "status": 404}})
    );
    Ok(())
}
