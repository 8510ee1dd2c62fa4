//! # Industries API Handlers

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
    AssociateCompanyRequest, CreateIndustryRequest, IndustriesResponse, IndustryLinkResponse,
    IndustryResponse,
};
use crate::repositories::IndustryRepository;
use crate::server::AppState;

/// List industries with the codes of their companies
#[utoipa::path(
    get,
    path = "/industries",
    responses(
        (status = 200, description = "Industries grouped by name", body = IndustriesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "industries"
)]
pub async fn list_industries(
    State(state): State<AppState>,
) -> Result<Json<IndustriesResponse>, ApiError> {
    let industries = IndustryRepository::new(&state.db).list_grouped().await?;

    Ok(Json(IndustriesResponse { industries }))
}

/// Create an industry
#[utoipa::path(
    post,
    path = "/industries",
    request_body = CreateIndustryRequest,
    responses(
        (status = 201, description = "Industry created", body = IndustryResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "The industry already exists", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "industries"
)]
pub async fn create_industry(
    State(state): State<AppState>,
    payload: Result<Json<CreateIndustryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IndustryResponse>), ApiError> {
    let Json(request) = payload?;

    let industry = IndustryRepository::new(&state.db)
        .create(request.code, request.industry)
        .await?;

    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// Link a company to an industry
#[utoipa::path(
    post,
    path = "/industries/{ind_code}",
    params(
        ("ind_code" = String, Path, description = "Industry code")
    ),
    request_body = AssociateCompanyRequest,
    responses(
        (status = 201, description = "Company linked to industry", body = IndustryLinkResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "Company or industry not found", body = ErrorBody),
        (status = 409, description = "Company already linked to this industry", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "industries"
)]
pub async fn associate_company(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AssociateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IndustryLinkResponse>), ApiError> {
    let Path(ind_code) = path?;
    let Json(request) = payload?;

    let industry = IndustryRepository::new(&state.db)
        .associate(ind_code, request.comp_code)
        .await?;

    Ok((StatusCode::CREATED, Json(IndustryLinkResponse { industry })))
}
