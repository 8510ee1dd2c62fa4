//! # Companies API Handlers
//!
//! This module contains handlers for company listing, lookup and management endpoints.

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
    CompaniesResponse, CompanyDeletedResponse, CompanyDetailResponse, CompanyRequest,
    CompanyResponse,
};
use crate::repositories::CompanyRepository;
use crate::repositories::company::CompanyInput;
use crate::server::AppState;

/// List all companies
#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "Companies as code and name", body = CompaniesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let companies = CompanyRepository::new(&state.db).list().await?;

    Ok(Json(CompaniesResponse {
        companies: companies.into_iter().map(Into::into).collect(),
    }))
}

/// Get a company with its invoices and industries
#[utoipa::path(
    get,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company detail", body = CompanyDetailResponse),
        (status = 404, description = "Company not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let Path(code) = path?;
    let company = CompanyRepository::new(&state.db).get_detail(&code).await?;

    Ok(Json(CompanyDetailResponse { company }))
}

/// Create a company; its code is derived from the name
#[utoipa::path(
    post,
    path = "/companies",
    request_body = CompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "The company already exists", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "companies"
)]
pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let Json(request) = payload?;

    let company = CompanyRepository::new(&state.db)
        .create(CompanyInput {
            name: request.name,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// Update the name and description of a company
#[utoipa::path(
    put,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Company not found", body = ErrorBody),
        (status = 409, description = "Another company already has this name", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "companies"
)]
pub async fn update_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let Path(code) = path?;
    let Json(request) = payload?;

    let company = CompanyRepository::new(&state.db)
        .update(
            &code,
            CompanyInput {
                name: request.name,
                description: request.description,
            },
        )
        .await?;

    Ok(Json(CompanyResponse { company }))
}

/// Delete a company together with its invoices and industry links
#[utoipa::path(
    delete,
    path = "/companies/{code}",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company deleted", body = CompanyDeletedResponse),
        (status = 404, description = "Company not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "companies"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CompanyDeletedResponse>, ApiError> {
    let Path(code) = path?;
    CompanyRepository::new(&state.db).delete(&code).await?;

    Ok(Json(CompanyDeletedResponse {
        message: "Company deleted".to_string(),
    }))
}
