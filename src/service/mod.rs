//! Client-side business logic built on top of the API clients.

pub mod form;
pub mod id;
pub mod insights;
pub mod stats;

pub use form::{build_record, FormInput};
pub use id::{next_id, next_id_for};
pub use insights::{
    format_prediction_date, FundLookup, InsightsOverview, InsightsService, NavPoint,
    PredictionsOverview, RiskBreakdown, RiskOverview,
};
pub use stats::{CatalogStats, StatsService};
