//! AI insights screens: per-fund lookup, the portfolio overview, NAV predictions and risk
//! analysis.

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    api::InsightsClient,
    error::{validation::ValidationError, Error},
    model::insights::{
        AiRecommendation, FundRiskDetail, NavPrediction, PerformanceClassification,
        PerformanceStats, RiskAssessment,
    },
};

/// Number of predictions highlighted ahead of the series.
pub const PREDICTION_HIGHLIGHTS: usize = 3;

/// Maximum number of funds in the current-vs-predicted NAV series.
pub const PREDICTION_SERIES_LEN: usize = 10;

/// Prediction and classification of a single fund.
#[derive(Debug, Clone, PartialEq)]
pub struct FundLookup {
    pub prediction: NavPrediction,
    pub classification: PerformanceClassification,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsOverview {
    pub stats: PerformanceStats,
    pub risk: RiskBreakdown,
    pub recommendations: Vec<AiRecommendation>,
}

/// Share of funds per risk tier, as whole percentages of the total fund count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskBreakdown {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl RiskBreakdown {
    pub fn from_stats(stats: &PerformanceStats) -> Self {
        Self {
            high: percentage(stats.high_risk_funds, stats.total_funds),
            medium: percentage(stats.medium_risk_funds, stats.total_funds),
            low: percentage(stats.low_risk_funds, stats.total_funds),
        }
    }
}

/// Current and predicted NAV of one fund.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPoint {
    pub fund_id: String,
    pub current: f64,
    pub predicted: f64,
}

/// NAV predictions across all funds, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionsOverview {
    /// The first [`PREDICTION_HIGHLIGHTS`] predictions
    pub highlights: Vec<NavPrediction>,
    /// The first [`PREDICTION_SERIES_LEN`] funds
    pub series: Vec<NavPoint>,
}

impl PredictionsOverview {
    pub fn from_predictions(predictions: &[NavPrediction]) -> Self {
        Self {
            highlights: predictions
                .iter()
                .take(PREDICTION_HIGHLIGHTS)
                .cloned()
                .collect(),
            series: predictions
                .iter()
                .take(PREDICTION_SERIES_LEN)
                .map(|prediction| NavPoint {
                    fund_id: prediction.fund_id.clone(),
                    current: prediction.current_nav,
                    predicted: prediction.predicted_nav,
                })
                .collect(),
        }
    }
}

/// Portfolio risk analysis with the model's feature weights.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskOverview {
    pub assessment: RiskAssessment,
    /// Feature weights, largest first
    pub feature_importance: Vec<(String, f64)>,
}

/// `part` as a truncated percentage of `total`; 0 when `total` is 0.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (u64::from(part) * 100 / u64::from(total)) as u32
}

/// Formats an ISO prediction date as `Mon YYYY`, e.g. `2024-03-15` as `Mar 2024`.
///
/// Year-month dates (`2024-03`) are accepted too. Anything else is returned unchanged.
pub fn format_prediction_date(date: &str) -> String {
    let date = date.trim();

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d"))
        .map(|parsed| parsed.format("%b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub struct InsightsService<'a> {
    client: &'a InsightsClient,
}

impl<'a> InsightsService<'a> {
    /// Creates a new instance of [`InsightsService`]
    pub fn new(client: &'a InsightsClient) -> Self {
        Self { client }
    }

    /// Fetches the NAV prediction and performance class of one fund concurrently.
    ///
    /// # Arguments
    /// - `fund_id` - Fund to look up; surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(FundLookup)` - Both responses
    /// - `Err(Error::ValidationError)` - `fund_id` is blank; no request is made
    /// - `Err(Error)` - Either request failed
    pub async fn lookup_fund(&self, fund_id: &str) -> Result<FundLookup, Error> {
        let fund_id = fund_id.trim();
        if fund_id.is_empty() {
            return Err(ValidationError::EmptyFundId.into());
        }

        tracing::debug!("Looking up insights for fund {}", fund_id);

        let (prediction, classification) = futures::try_join!(
            self.client.predict_nav(fund_id),
            self.client.classify(fund_id)
        )?;

        Ok(FundLookup {
            prediction,
            classification,
        })
    }

    /// Risk detail of one fund.
    ///
    /// # Returns
    /// - `Ok(FundRiskDetail)` - The fund's risk level, score and warning
    /// - `Err(Error::ValidationError)` - `fund_id` is blank; no request is made
    /// - `Err(Error)` - The request failed
    pub async fn fund_risk(&self, fund_id: &str) -> Result<FundRiskDetail, Error> {
        let fund_id = fund_id.trim();
        if fund_id.is_empty() {
            return Err(ValidationError::EmptyFundId.into());
        }

        tracing::debug!("Looking up risk detail for fund {}", fund_id);

        self.client.fund_risk(fund_id).await
    }

    /// Fetches every fund's NAV prediction and keeps the highlights and the NAV series.
    pub async fn predictions(&self) -> Result<PredictionsOverview, Error> {
        let predictions = self.client.predict_nav_all().await?;

        tracing::debug!("Fetched {} NAV predictions", predictions.len());

        Ok(PredictionsOverview::from_predictions(&predictions))
    }

    /// Fetches the risk assessment and feature importance concurrently.
    pub async fn risk(&self) -> Result<RiskOverview, Error> {
        let (assessment, importance) = futures::try_join!(
            self.client.risk_assessment(),
            self.client.feature_importance()
        )?;

        let mut feature_importance: Vec<(String, f64)> = importance.into_iter().collect();
        feature_importance.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(RiskOverview {
            assessment,
            feature_importance,
        })
    }

    /// Fetches model statistics and the top `top_n` recommendations concurrently.
    pub async fn overview(&self, top_n: u32) -> Result<InsightsOverview, Error> {
        let (stats, recommendations) = futures::try_join!(
            self.client.stats(),
            self.client.recommendations(top_n)
        )?;

        Ok(InsightsOverview {
            risk: RiskBreakdown::from_stats(&stats),
            stats,
            recommendations,
        })
    }
}
