//! Test fixture modules for record and HTTP mock creation.
//!
//! - `catalog` - catalog records and the CRUD endpoints serving them
//! - `insights` - canned `/ai/*` payloads and their endpoints

pub mod catalog;
pub mod insights;
