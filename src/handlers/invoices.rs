//! # Invoices API Handlers
//!
//! This module contains handlers for invoice endpoints. Updating an invoice
//! also maintains its `paid_date`.

use axum::{
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Json,
};

use crate::error::{ApiError, ErrorBody};
use crate::handlers::types::{
    CreateInvoiceRequest, InvoiceDeletedResponse, InvoiceDetailResponse, InvoiceResponse,
    InvoicesResponse, UpdateInvoiceRequest,
};
use crate::repositories::InvoiceRepository;
use crate::repositories::invoice::{InvoiceUpdate, NewInvoice};
use crate::server::AppState;

/// List all invoices
#[utoipa::path(
    get,
    path = "/invoices",
    responses(
        (status = 200, description = "Invoices as id and company code", body = InvoicesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "invoices"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    let invoices = InvoiceRepository::new(&state.db).list().await?;

    Ok(Json(InvoicesResponse {
        invoices: invoices.into_iter().map(Into::into).collect(),
    }))
}

/// Get an invoice with its company
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    responses(
        (status = 200, description = "Invoice detail", body = InvoiceDetailResponse),
        (status = 400, description = "Invalid invoice id", body = ErrorBody),
        (status = 404, description = "Invoice not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<InvoiceDetailResponse>, ApiError> {
    let Path(id) = path?;
    let invoice = InvoiceRepository::new(&state.db).get_detail(id).await?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// Create an unpaid invoice for a company
#[utoipa::path(
    post,
    path = "/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Company was not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    payload: Result<Json<CreateInvoiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ApiError> {
    let Json(request) = payload?;

    let invoice = InvoiceRepository::new(&state.db)
        .create(NewInvoice {
            comp_code: request.comp_code,
            amt: request.amt,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// Update the amount and payment state of an invoice
#[utoipa::path(
    put,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated", body = InvoiceResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 404, description = "Invoice not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "invoices"
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateInvoiceRequest>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let Path(id) = path?;
    let Json(request) = payload?;

    let invoice = InvoiceRepository::new(&state.db)
        .update(
            id,
            InvoiceUpdate {
                amt: request.amt,
                paid: request.paid,
            },
        )
        .await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// Delete an invoice
#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    params(
        ("id" = i32, Path, description = "Invoice id")
    ),
    responses(
        (status = 200, description = "Invoice deleted", body = InvoiceDeletedResponse),
        (status = 400, description = "Invalid invoice id", body = ErrorBody),
        (status = 404, description = "Invoice not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "invoices"
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<InvoiceDeletedResponse>, ApiError> {
    let Path(id) = path?;
    InvoiceRepository::new(&state.db).delete(id).await?;

    Ok(Json(InvoiceDeletedResponse {
        status: "Invoice deleted".to_string(),
    }))
}
