//! Client core of the fund back office.
//!
//! Fetches the entity catalog (legal entities, management entities, funds, sub-funds and
//! share classes) from the REST backend, keeps one filterable list per kind, proposes ids
//! for new records, routes taps on key fields between lists, and fetches the AI insights.
//! Rendering is left to whichever front end drives these types; the bundled binary is a
//! small command-line one.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod service;
pub mod session;

pub use entity;
