//! Canned `/ai/*` response bodies in the backend's snake_case shape.

use serde_json::{json, Value};

pub fn mock_stats() -> Value {
    json!({
        "model_accuracy": 87.5,
        "total_funds": 40,
        "high_performers": 10,
        "medium_performers": 20,
        "low_performers": 10,
        "high_risk_funds": 8,
        "medium_risk_funds": 12,
        "low_risk_funds": 20
    })
}

pub fn mock_recommendation(fund_id: &str, score: f64) -> Value {
    json!({
        "fund_id": fund_id,
        "fund_name": format!("Fund {}", fund_id),
        "nav": 12.5,
        "aum": 1500000.0,
        "investment_score": score,
        "performance_class": "HIGH",
        "risk_level": "LOW",
        "recommendation": "BUY",
        "expense_ratio": 0.9
    })
}

pub fn mock_nav_prediction(fund_id: &str) -> Value {
    json!({
        "fund_id": fund_id,
        "fund_name": format!("Fund {}", fund_id),
        "current_nav": 100.0,
        "predicted_nav": 104.5,
        "confidence": 78.0,
        "prediction_date": "2024-03-15",
        "change_percentage": 4.5
    })
}

pub fn mock_classification(fund_id: &str) -> Value {
    json!({
        "fund_id": fund_id,
        "fund_name": format!("Fund {}", fund_id),
        "performance_class": "MEDIUM",
        "confidence": 0.66,
        "recommendation": "HOLD"
    })
}

pub fn mock_risk_assessment() -> Value {
    json!({
        "high_risk_count": 2,
        "avg_high_risk_expense": 2.1,
        "avg_high_risk_perf_fee": 18.0,
        "recommendation": "Review fee structure of high risk funds",
        "high_risk_funds": ["F000003", "F000009"]
    })
}

pub fn mock_fund_risk(fund_id: &str) -> Value {
    json!({
        "fund_id": fund_id,
        "fund_name": format!("Fund {}", fund_id),
        "risk_level": "HIGH",
        "risk_score": 0.91,
        "expense_ratio": 2.3,
        "perf_fee": 20.0,
        "warning_message": "Expense ratio above peer median"
    })
}

pub fn mock_feature_importance() -> Value {
    json!({
        "expense_ratio": 0.41,
        "aum": 0.33,
        "perf_fee": 0.26
    })
}
