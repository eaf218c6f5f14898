// src/export/mod.rs
//! Export of migration results
//!
//! Reports carry ids, e-mails and outcomes only. Password hashes never
//! leave the migration process.

pub use json::export_report_json;

pub mod json;
