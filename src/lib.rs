//! # BizTime API Library
//!
//! This library provides the core functionality for the BizTime service:
//! companies, their invoices and the industries they belong to, served over
//! a JSON HTTP API backed by SeaORM.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod slug;
pub mod telemetry;
pub use migration;
