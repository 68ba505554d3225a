use entity::{FundMaster, LegalEntity};

use crate::{error::validation::ValidationError, service::FormInput};

use super::*;

fn draft_fund(name: &str) -> FundMaster {
    FundMaster {
        fund_id: String::new(),
        fund_name: name.to_string(),
        ..factory::mock_fund(0, 1, 1)
    }
}

/// Expect add to propose the next id, create the record and reload it from the backend
#[tokio::test]
async fn add_creates_next_id_and_reloads() -> Result<(), TestError> {
    let existing = vec![factory::mock_fund(1, 1, 1), factory::mock_fund(10, 1, 1)];
    let (mut test, mut controller) = loaded_controller(existing.clone()).await?;

    let mut created = draft_fund("Euro Bond");
    created.fund_id = "F000011".to_string();
    let mut after = existing;
    after.push(created.clone());

    test.clear_mocks();
    let create = test.catalog().create_create_endpoint(&created, 1);
    let list = test.catalog().create_list_endpoint(&after, 1);

    let result = controller.add(draft_fund("Euro Bond")).await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(result.unwrap().message(), Some("created"));
    let stored = controller
        .all()
        .iter()
        .find(|fund| fund.fund_id == "F000011")
        .unwrap();
    assert_eq!(stored, &created);
    let notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Fund added successfully");
    create.assert();
    list.assert();

    Ok(())
}

/// Expect edit to keep the primary key fixed and show the patched values after reload
#[tokio::test]
async fn edit_reloads_patched_record() -> Result<(), TestError> {
    let original = factory::mock_fund(1, 1, 1);
    let (mut test, mut controller) = loaded_controller(vec![original.clone()]).await?;

    let patched = FundMaster {
        fund_name: "Renamed Fund".to_string(),
        status: "CLOSED".to_string(),
        ..original
    };
    let patch = FundMaster {
        fund_id: "F999999".to_string(),
        ..patched.clone()
    };

    test.clear_mocks();
    let update = test
        .catalog()
        .create_update_endpoint("F000001", &patched, 1);
    let list = test.catalog().create_list_endpoint(&[patched.clone()], 1);

    let result = controller.edit("F000001", patch).await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(controller.visible(), &[patched]);
    assert_eq!(
        controller.take_notifications()[0].message,
        "Fund updated successfully"
    );
    update.assert();
    list.assert();

    Ok(())
}

/// Expect a rejected create to leave state unchanged and offer the same record again
#[tokio::test]
async fn duplicate_id_rejection_offers_retry() -> Result<(), TestError> {
    let (mut test, mut controller) = loaded_controller(vec![factory::mock_fund(1, 1, 1)]).await?;

    test.clear_mocks();
    let rejected = test.catalog().create_error_endpoint(
        "POST",
        "/funds",
        409,
        "Fund F000002 already exists",
        1,
    );

    let result = controller.add(draft_fund("Racing Fund")).await;

    match &result {
        Err(Error::ApiError(err)) => assert_eq!(err.status(), 409),
        other => panic!("expected conflict, got {:?}", other),
    }
    assert_eq!(controller.all().len(), 1);

    let notification = controller.take_notifications().remove(0);
    assert_eq!(
        notification.message,
        "Failed to add: Request failed with status 409: Fund F000002 already exists"
    );
    match notification.retry {
        Some(RetryAction::Create(record)) => assert_eq!(record.fund_id, "F000002"),
        other => panic!("expected create retry, got {:?}", other),
    }
    rejected.assert();

    Ok(())
}

/// Expect a form missing required fields to be rejected before any request
#[tokio::test]
async fn invalid_form_blocks_request() -> Result<(), TestError> {
    let (mut test, mut controller) =
        loaded_controller(vec![factory::mock_legal_entity(1)]).await?;
    test.clear_mocks();
    let create = test
        .catalog()
        .create_error_endpoint("POST", "/legal_entities", 500, "unexpected", 0);

    let form = FormInput::new().with("legalName", "Autumn Capital");
    let result = controller.add_from_form(&form).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingFields { .. }))
    ));
    let notification = controller.take_notifications().remove(0);
    assert!(notification.is_error());
    assert_eq!(notification.retry, None);
    create.assert();

    Ok(())
}

/// Expect a valid form to be created under the next id
#[tokio::test]
async fn valid_form_is_created() -> Result<(), TestError> {
    let (mut test, mut controller) = loaded_controller::<LegalEntity>(vec![]).await?;

    let expected = LegalEntity {
        le_id: "LE000001".to_string(),
        lei: "5493001KJTIIGC8Y0001".to_string(),
        legal_name: "Autumn Capital".to_string(),
        jurisdiction: "LU".to_string(),
        entity_type: "SICAV".to_string(),
    };
    test.clear_mocks();
    let create = test.catalog().create_create_endpoint(&expected, 1);
    let list = test.catalog().create_list_endpoint(&[expected.clone()], 1);

    let form = FormInput::new()
        .with("lei", "5493001KJTIIGC8Y0001")
        .with("legalName", " Autumn Capital ")
        .with("JURISDICTION", "LU")
        .with("entityType", "SICAV");
    let result = controller.add_from_form(&form).await;

    assert!(result.is_ok(), "{:?}", result);
    assert_eq!(controller.all(), &[expected]);
    create.assert();
    list.assert();

    Ok(())
}

/// Expect remove to delete the record and reload the list
#[tokio::test]
async fn remove_deletes_and_reloads() -> Result<(), TestError> {
    let funds = vec![factory::mock_fund(1, 1, 1), factory::mock_fund(2, 1, 1)];
    let (mut test, mut controller) = loaded_controller(funds.clone()).await?;

    test.clear_mocks();
    let delete = test.catalog().create_delete_endpoint::<FundMaster>("F000002", 1);
    let list = test.catalog().create_list_endpoint(&funds[..1], 1);

    let result = controller.remove("F000002").await;

    assert!(result.is_ok(), "{:?}", result);
    assert!(result.unwrap().is_empty());
    assert_eq!(controller.all().len(), 1);
    assert_eq!(
        controller.take_notifications()[0].message,
        "Fund deleted successfully"
    );
    delete.assert();
    list.assert();

    Ok(())
}

/// Expect a write finishing after teardown to neither notify nor reload
#[tokio::test]
async fn write_after_teardown_is_silent() -> Result<(), TestError> {
    let existing = vec![factory::mock_fund(1, 1, 1)];
    let (mut test, mut controller) = loaded_controller(existing.clone()).await?;

    let mut created = draft_fund("Late Fund");
    created.fund_id = "F000002".to_string();

    test.clear_mocks();
    let create = test.catalog().create_create_endpoint(&created, 1);
    let list = test.catalog().create_list_endpoint(&existing, 0);

    controller.teardown();
    let result = controller.add(draft_fund("Late Fund")).await;

    assert!(result.is_ok(), "{:?}", result);
    assert!(controller.take_notifications().is_empty());
    assert_eq!(controller.all(), existing.as_slice());
    create.assert();
    list.assert();

    Ok(())
}

/// Expect retrying a failed update to send the same record again
#[tokio::test]
async fn retry_resends_failed_update() -> Result<(), TestError> {
    let original = factory::mock_fund(1, 1, 1);
    let (mut test, mut controller) = loaded_controller(vec![original.clone()]).await?;
    let patched = FundMaster {
        fund_name: "Retried".to_string(),
        ..original
    };

    test.clear_mocks();
    let failing = test
        .catalog()
        .create_error_endpoint("PUT", "/funds/F000001", 502, "Bad Gateway", 1);

    assert!(controller.edit("F000001", patched.clone()).await.is_err());
    let retry = controller.take_notifications().remove(0).retry.unwrap();
    assert_eq!(
        retry,
        RetryAction::Update("F000001".to_string(), patched.clone())
    );
    failing.assert();

    failing.remove();
    let update = test
        .catalog()
        .create_update_endpoint("F000001", &patched, 1);
    let list = test.catalog().create_list_endpoint(&[patched.clone()], 1);

    controller.retry(retry).await.unwrap();

    assert_eq!(controller.visible(), &[patched]);
    update.assert();
    list.assert();

    Ok(())
}
