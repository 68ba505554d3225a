//! Insight and statistics services against a mock backend.

use fundbank::service::{InsightsService, StatsService};
use fundbank_test_utils::prelude::*;

use crate::util::TestSetupExt;

/// Expect the overview to combine model stats with ranked recommendations
#[tokio::test]
async fn overview() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_insight_endpoint("/ai/stats", data::mock_stats(), 1)
        .build()
        .await?;
    let body = serde_json::json!([
        data::mock_recommendation("F000007", 0.95),
        data::mock_recommendation("F000002", 0.88),
        data::mock_recommendation("F000004", 0.61),
    ]);
    let mock = test
        .insights()
        .create_recommendations_endpoint(10, &body, 1);
    test.mocks.push(mock);

    let client = test.insights_client();
    let overview = InsightsService::new(&client).overview(10).await.unwrap();

    assert_eq!(overview.stats.total_funds, 40);
    assert_eq!(
        (overview.risk.high, overview.risk.medium, overview.risk.low),
        (20, 30, 50)
    );
    let ids: Vec<&str> = overview
        .recommendations
        .iter()
        .map(|rec| rec.fund_id.as_str())
        .collect();
    assert_eq!(ids, vec!["F000007", "F000002", "F000004"]);
    test.assert_mocks();

    Ok(())
}

/// Expect one failing half of a fund lookup to fail the whole lookup
#[tokio::test]
async fn fund_lookup_fails_as_a_whole() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_insight_endpoint(
            "/ai/predict-nav/F000001",
            data::mock_nav_prediction("F000001"),
            1,
        )
        .with_error_endpoint("GET", "/ai/classify/F000001", 404, "Fund not found", 1)
        .build()
        .await?;

    let client = test.insights_client();
    let result = InsightsService::new(&client).lookup_fund("F000001").await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 404: Fund not found");
    assert!(err.is_retryable());

    Ok(())
}

/// Expect the NAV series to stop at ten funds while highlighting the first three
#[tokio::test]
async fn predictions_cap_the_series() -> Result<(), TestError> {
    let body = serde_json::Value::Array(
        (1..=12)
            .map(|n| data::mock_nav_prediction(&factory::fund_id(n)))
            .collect(),
    );
    let test = TestBuilder::new()
        .with_insight_endpoint("/ai/predict-nav-all", body, 1)
        .build()
        .await?;

    let client = test.insights_client();
    let predictions = InsightsService::new(&client).predictions().await.unwrap();

    let highlights: Vec<&str> = predictions
        .highlights
        .iter()
        .map(|prediction| prediction.fund_id.as_str())
        .collect();
    assert_eq!(highlights, vec!["F000001", "F000002", "F000003"]);
    assert_eq!(predictions.series.len(), 10);
    assert_eq!(predictions.series[9].fund_id, "F000010");
    assert_eq!(
        (predictions.series[0].current, predictions.series[0].predicted),
        (100.0, 104.5)
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a failing feature importance request to fail the risk analysis
#[tokio::test]
async fn risk_fails_as_a_whole() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_insight_endpoint("/ai/risk-assessment", data::mock_risk_assessment(), 1)
        .with_error_endpoint("GET", "/ai/feature-importance", 500, "Model not loaded", 1)
        .build()
        .await?;

    let client = test.insights_client();
    let result = InsightsService::new(&client).risk().await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 500: Model not loaded");

    Ok(())
}

/// Expect the risk detail of one fund
#[tokio::test]
async fn fund_risk() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_insight_endpoint(
            "/ai/risk-assessment/F000003",
            data::mock_fund_risk("F000003"),
            1,
        )
        .build()
        .await?;

    let client = test.insights_client();
    let detail = InsightsService::new(&client).fund_risk(" F000003 ").await.unwrap();

    assert_eq!(detail.fund_id, "F000003");
    assert_eq!(detail.risk_score, 0.91);
    assert_eq!(
        detail.warning_message.as_deref(),
        Some("Expense ratio above peer median")
    );
    test.assert_mocks();

    Ok(())
}

/// Expect dashboard statistics over the legal entity, fund and share class collections
#[tokio::test]
async fn catalog_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(
            vec![factory::mock_legal_entity(1), factory::mock_legal_entity(2)],
            1,
        )
        .with_list_endpoint(
            vec![factory::mock_fund(1, 1, 1), factory::mock_fund(2, 1, 2)],
            1,
        )
        .with_list_endpoint(
            vec![
                factory::mock_share_class(1, 1, "EUR", 1_500_000.0),
                factory::mock_share_class(2, 2, "USD", 2_500_000.0),
                factory::mock_share_class(3, 2, "EUR", 1_000_000.0),
            ],
            1,
        )
        .build()
        .await?;
    let (legal_entities, funds, share_classes) = (
        test.catalog_client(),
        test.catalog_client(),
        test.catalog_client(),
    );

    let stats = StatsService::new(&legal_entities, &funds, &share_classes)
        .load()
        .await
        .unwrap();

    assert_eq!(stats.legal_entity_count, 2);
    assert_eq!(stats.fund_count, 2);
    assert_eq!(stats.share_class_count, 3);
    assert_eq!(stats.total_aum, 5_000_000.0);
    assert_eq!(
        stats.currencies,
        vec![("EUR".to_string(), 2), ("USD".to_string(), 1)]
    );
    test.assert_mocks();

    Ok(())
}
