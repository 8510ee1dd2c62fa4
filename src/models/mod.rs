//! # Data Models
//!
//! This module contains the SeaORM entities and query row types used
//! throughout the BizTime API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod company;
pub mod company_industry;
pub mod industry;
pub mod invoice;
pub mod rows;

pub use company::Entity as Company;
pub use company_industry::Entity as CompanyIndustry;
pub use industry::Entity as Industry;
pub use invoice::Entity as Invoice;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "biztime".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
