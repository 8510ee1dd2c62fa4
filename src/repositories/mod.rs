//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM operations
//! for the BizTime tables. Every repository borrows the shared connection pool and
//! classifies database failures into [`crate::error::RepositoryError`].

pub mod company;
pub mod industry;
pub mod invoice;

pub use company::CompanyRepository;
pub use industry::IndustryRepository;
pub use invoice::InvoiceRepository;
