//! Response bodies of the `/ai/*` endpoints.
//!
//! Field names follow the backend's snake_case convention, so no renames are needed.
//! Categorical strings decode into [`Tier`] and [`Advice`]; values the backend may add later
//! decode as `Unknown` instead of failing the whole response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Advice {
    Buy,
    Hold,
    Avoid,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Aggregate model statistics from `GET /ai/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceStats {
    /// Percent, 0 to 100.
    pub model_accuracy: f64,
    pub total_funds: u32,
    pub high_performers: u32,
    pub medium_performers: u32,
    pub low_performers: u32,
    pub high_risk_funds: u32,
    pub medium_risk_funds: u32,
    pub low_risk_funds: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiRecommendation {
    pub fund_id: String,
    pub fund_name: String,
    pub nav: f64,
    pub aum: f64,
    pub investment_score: f64,
    pub performance_class: Tier,
    pub risk_level: Tier,
    pub recommendation: Advice,
    pub expense_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavPrediction {
    pub fund_id: String,
    pub fund_name: String,
    pub current_nav: f64,
    pub predicted_nav: f64,
    /// Percent, 0 to 100.
    pub confidence: f64,
    /// ISO date (`YYYY-MM-DD`) the prediction applies to.
    pub prediction_date: String,
    pub change_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceClassification {
    pub fund_id: String,
    pub fund_name: String,
    pub performance_class: Tier,
    /// Probability of `performance_class`, 0 to 1.
    pub confidence: f64,
    pub recommendation: Advice,
}

/// Portfolio-wide risk overview from `GET /ai/risk-assessment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub high_risk_count: u32,
    pub avg_high_risk_expense: f64,
    pub avg_high_risk_perf_fee: f64,
    pub recommendation: String,
    pub high_risk_funds: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundRiskDetail {
    pub fund_id: String,
    pub fund_name: String,
    pub risk_level: Tier,
    pub risk_score: f64,
    pub expense_ratio: f64,
    pub perf_fee: f64,
    pub warning_message: Option<String>,
}

/// Model feature name to importance weight, ordered by name.
pub type FeatureImportance = BTreeMap<String, f64>;
