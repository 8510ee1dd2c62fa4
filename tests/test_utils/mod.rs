//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, fixture rows, and an app router bound to them.

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use biztime::config::AppConfig;
use biztime::models::{company, company_industry, industry, invoice};
use biztime::server::{AppState, create_app};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, NotSet, Set};
use serde_json::Value;
use tower::ServiceExt;

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// The pool holds a single connection so every query sees the same
/// in-memory database. Foreign keys are enforced.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the application router on top of `db`.
pub fn test_app(db: &DatabaseConnection) -> Router {
    create_app(AppState {
        config: Arc::new(AppConfig::default()),
        db: db.clone(),
    })
}

/// Inserts a company row directly.
pub async fn insert_company(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    description: Option<&str>,
) -> Result<company::Model> {
    let model = company::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts an unpaid invoice row directly.
pub async fn insert_invoice(
    db: &DatabaseConnection,
    comp_code: &str,
    amt: f64,
) -> Result<invoice::Model> {
    let model = invoice::ActiveModel {
        id: NotSet,
        comp_code: Set(comp_code.to_string()),
        amt: Set(amt),
        paid: Set(false),
        add_date: Set(Utc::now()),
        paid_date: Set(None),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts an industry row directly.
pub async fn insert_industry(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
) -> Result<industry::Model> {
    let model = industry::ActiveModel {
        code: Set(code.to_string()),
        industry: Set(name.to_string()),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Links a company to an industry directly.
pub async fn link_company(db: &DatabaseConnection, ind_code: &str, comp_code: &str) -> Result<()> {
    company_industry::ActiveModel {
        ind_code: Set(ind_code.to_string()),
        comp_code: Set(comp_code.to_string()),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Sends one request through `app` and returns the status and parsed JSON body.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
