use crate::{
    api::ApiClient,
    error::{validation::ValidationError, Error},
    model::insights::{
        AiRecommendation, FeatureImportance, FundRiskDetail, NavPrediction,
        PerformanceClassification, PerformanceStats, RiskAssessment,
    },
};

/// Client for the model-backed `/ai/*` endpoints.
#[derive(Debug, Clone)]
pub struct InsightsClient {
    api: ApiClient,
}

impl InsightsClient {
    /// Creates a new instance of [`InsightsClient`]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn predict_nav(&self, fund_id: &str) -> Result<NavPrediction, Error> {
        let fund_id = fund_id_arg(fund_id)?;

        self.api.get(&["ai", "predict-nav", fund_id]).await
    }

    pub async fn predict_nav_all(&self) -> Result<Vec<NavPrediction>, Error> {
        self.api.get(&["ai", "predict-nav-all"]).await
    }

    pub async fn classify(&self, fund_id: &str) -> Result<PerformanceClassification, Error> {
        let fund_id = fund_id_arg(fund_id)?;

        self.api.get(&["ai", "classify", fund_id]).await
    }

    /// Top `top_n` funds by investment score.
    pub async fn recommendations(&self, top_n: u32) -> Result<Vec<AiRecommendation>, Error> {
        self.api
            .get_query(&["ai", "recommendations"], &[("top_n", top_n.to_string())])
            .await
    }

    pub async fn stats(&self) -> Result<PerformanceStats, Error> {
        self.api.get(&["ai", "stats"]).await
    }

    pub async fn risk_assessment(&self) -> Result<RiskAssessment, Error> {
        self.api.get(&["ai", "risk-assessment"]).await
    }

    pub async fn fund_risk(&self, fund_id: &str) -> Result<FundRiskDetail, Error> {
        let fund_id = fund_id_arg(fund_id)?;

        self.api.get(&["ai", "risk-assessment", fund_id]).await
    }

    pub async fn feature_importance(&self) -> Result<FeatureImportance, Error> {
        self.api.get(&["ai", "feature-importance"]).await
    }
}

fn fund_id_arg(fund_id: &str) -> Result<&str, ValidationError> {
    let fund_id = fund_id.trim();
    if fund_id.is_empty() {
        return Err(ValidationError::EmptyFundId);
    }
    Ok(fund_id)
}
