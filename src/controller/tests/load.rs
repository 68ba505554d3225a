use entity::{FundMaster, LegalEntity};

use super::*;

/// Expect Ok with records kept in backend order
#[tokio::test]
async fn loads_records_in_backend_order() -> Result<(), TestError> {
    let records = vec![
        factory::mock_legal_entity(3),
        factory::mock_legal_entity(1),
        factory::mock_legal_entity(2),
    ];
    let test = TestBuilder::new()
        .with_list_endpoint(records.clone(), 1)
        .build()
        .await?;
    let mut controller = list_controller::<LegalEntity>(&test);

    let result = controller.load().await;

    assert!(matches!(result, Ok(LoadStatus::Applied)));
    assert_eq!(controller.all(), records.as_slice());
    assert_eq!(controller.visible(), records.as_slice());
    assert!(!controller.is_loading());
    assert!(controller.take_notifications().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect the previous list to survive a network failure, with a retryable notification
#[tokio::test]
async fn network_failure_keeps_previous_list() -> Result<(), TestError> {
    let records: Vec<LegalEntity> = (1..=5).map(factory::mock_legal_entity).collect();
    let (_test, mut controller) = loaded_controller(records.clone()).await?;

    let request = controller.begin_load();
    let response = transport_failure::<LegalEntity>(request.generation()).await;
    let result = controller.complete_load(response);

    assert!(matches!(result, Err(Error::RequestError(_))));
    assert_eq!(controller.all(), records.as_slice());
    assert_eq!(controller.visible().len(), 5);
    assert!(!controller.is_loading());

    let notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].is_error());
    assert!(notifications[0].message.starts_with("Failed to load data: "));
    assert_eq!(notifications[0].retry, Some(RetryAction::Load));
    assert_eq!(
        controller.last_error(),
        Some(notifications[0].message.as_str())
    );

    Ok(())
}

/// Expect Error carrying the server message for a non-2xx response
#[tokio::test]
async fn status_error_offers_retry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/funds", 500, "database unavailable", 1)
        .build()
        .await?;
    let mut controller = list_controller::<FundMaster>(&test);

    let result = controller.load().await;

    match result {
        Err(Error::ApiError(err)) => assert_eq!(err.status(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
    let notifications = controller.take_notifications();
    assert_eq!(
        notifications[0].message,
        "Failed to load data: Request failed with status 500: database unavailable"
    );
    assert_eq!(notifications[0].retry, Some(RetryAction::Load));
    assert!(controller.all().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a malformed body to surface as a retryable parse error
#[tokio::test]
async fn malformed_body_offers_retry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/funds")
                .with_status(200)
                .with_header("content-type", "text/html")
                .with_body("<html>Bad gateway</html>")
                .create()
        })
        .build()
        .await?;
    let mut controller = list_controller::<FundMaster>(&test);

    let result = controller.load().await;

    assert!(matches!(result, Err(Error::ParseError(_))));
    assert_eq!(
        controller.take_notifications()[0].retry,
        Some(RetryAction::Load)
    );

    Ok(())
}

/// Expect the response of a superseded load to be ignored
#[tokio::test]
async fn superseded_load_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(vec![factory::mock_legal_entity(1)], 1)
        .build()
        .await?;
    let mut controller = list_controller::<LegalEntity>(&test);

    let first = controller.begin_load();
    let second = controller.begin_load();
    let stale = transport_failure::<LegalEntity>(first.generation()).await;
    let fresh = second.send().await;

    assert!(matches!(
        controller.complete_load(fresh),
        Ok(LoadStatus::Applied)
    ));
    assert!(matches!(
        controller.complete_load(stale),
        Ok(LoadStatus::Superseded)
    ));
    assert_eq!(controller.all().len(), 1);
    assert!(controller.last_error().is_none());
    assert!(controller.take_notifications().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a completion arriving after teardown to leave state untouched
#[tokio::test]
async fn completion_after_teardown_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(vec![factory::mock_legal_entity(1)], 1)
        .build()
        .await?;
    let mut controller = list_controller::<LegalEntity>(&test);

    let request = controller.begin_load();
    controller.teardown();
    let response = request.send().await;

    assert!(matches!(
        controller.complete_load(response),
        Ok(LoadStatus::Inactive)
    ));
    assert!(controller.all().is_empty());
    assert!(!controller.is_active());

    Ok(())
}

/// Expect a successful retry to clear the error state
#[tokio::test]
async fn retry_after_failure_clears_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_error_endpoint("GET", "/legal_entities", 503, "maintenance", 1)
        .build()
        .await?;
    let mut controller = list_controller::<LegalEntity>(&test);

    assert!(controller.load().await.is_err());
    let retry = controller.take_notifications().remove(0).retry;
    assert!(controller.last_error().is_some());

    test.clear_mocks();
    let mock = test
        .catalog()
        .create_list_endpoint(&[factory::mock_legal_entity(1)], 1);

    let result = controller.retry(retry.unwrap()).await;

    assert!(result.is_ok());
    assert!(controller.last_error().is_none());
    assert_eq!(controller.visible().len(), 1);
    mock.assert();

    Ok(())
}
