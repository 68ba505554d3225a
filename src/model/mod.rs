//! Wire-level data transfer objects that are not catalog records.

pub mod api;
pub mod insights;
