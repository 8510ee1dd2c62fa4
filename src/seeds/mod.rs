//! Database seeding functionality
//!
//! This module provides functionality to seed the database with a small
//! sample dataset of companies, invoices and industries for local use.

pub mod sample;

pub use sample::seed_sample_data;
