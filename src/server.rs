//! # Server Configuration
//!
//! This module contains the server setup and configuration for the BizTime API.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use sea_orm::DatabaseConnection;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::handlers::{self, companies, industries, invoices};
use crate::telemetry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{code}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
        .route(
            "/industries",
            get(industries::list_industries).post(industries::create_industry),
        )
        .route(
            "/industries/{ind_code}",
            axum::routing::post(industries::associate_company),
        )
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(telemetry::trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Starts the server with the given configuration
///
/// Serves until Ctrl+C or SIGTERM, then drains in-flight requests and closes
/// the connection pool.
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
    };
    let app = create_app(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %state.config.profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::companies::list_companies,
        crate::handlers::companies::get_company,
        crate::handlers::companies::create_company,
        crate::handlers::companies::update_company,
        crate::handlers::companies::delete_company,
        crate::handlers::invoices::list_invoices,
        crate::handlers::invoices::get_invoice,
        crate::handlers::invoices::create_invoice,
        crate::handlers::invoices::update_invoice,
        crate::handlers::invoices::delete_invoice,
        crate::handlers::industries::list_industries,
        crate::handlers::industries::create_industry,
        crate::handlers::industries::associate_company,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::models::company::Model,
            crate::models::invoice::Model,
            crate::models::industry::Model,
            crate::models::company_industry::Model,
            crate::mapper::CompanyDetail,
            crate::mapper::CompanyInvoice,
            crate::mapper::CompanyIndustryName,
            crate::mapper::InvoiceDetail,
            crate::handlers::types::CompanyRequest,
            crate::handlers::types::CompanySummary,
            crate::handlers::types::CompaniesResponse,
            crate::handlers::types::CompanyDetailResponse,
            crate::handlers::types::CompanyResponse,
            crate::handlers::types::CompanyDeletedResponse,
            crate::handlers::types::CreateInvoiceRequest,
            crate::handlers::types::UpdateInvoiceRequest,
            crate::handlers::types::InvoiceSummary,
            crate::handlers::types::InvoicesResponse,
            crate::handlers::types::InvoiceDetailResponse,
            crate::handlers::types::InvoiceResponse,
            crate::handlers::types::InvoiceDeletedResponse,
            crate::handlers::types::CreateIndustryRequest,
            crate::handlers::types::AssociateCompanyRequest,
            crate::handlers::types::IndustriesResponse,
            crate::handlers::types::IndustryResponse,
            crate::handlers::types::IndustryLinkResponse,
            crate::handlers::types::HealthResponse,
        )
    ),
    tags(
        (name = "root", description = "Service information and health"),
        (name = "companies", description = "Companies and their details"),
        (name = "invoices", description = "Invoices and payment state"),
        (name = "industries", description = "Industries and company links"),
    ),
    info(
        title = "BizTime API",
        description = "API for tracking companies, their invoices and industries",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
