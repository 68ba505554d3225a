use fundbank::{
    controller::{NotificationLevel, RetryAction},
    entity::{FundMaster, ShareClass},
    error::Error,
    service::FormInput,
};

use super::*;

fn fund_form() -> FormInput {
    FormInput::new()
        .with("fundName", "  Euro Bond  ")
        .with("MGMT_ID", "MG000001")
        .with("leId", "LE000001")
        .with("fundCode", "EB01")
        .with("fundType", "UCITS")
        .with("baseCurrency", "EUR")
        .with("domicile", "LU")
        .with("isinMaster", "LU0000000011")
        .with("status", "ACTIVE")
}

/// Expect a form submission to be created under the next id and appear after the reload
#[tokio::test]
async fn add_from_form_round_trip() -> Result<(), TestError> {
    let existing = vec![factory::mock_fund(1, 1, 1), factory::mock_fund(2, 1, 1)];
    let mut test = TestBuilder::new()
        .with_list_endpoint(existing.clone(), 1)
        .build()
        .await?;
    let mut navigator = test.navigator();

    let controller = navigator.controller::<FundMaster>().unwrap();
    controller.load().await.unwrap();

    let created = FundMaster {
        fund_id: "F000003".to_string(),
        mgmt_id: "MG000001".to_string(),
        le_id: "LE000001".to_string(),
        fund_code: "EB01".to_string(),
        fund_name: "Euro Bond".to_string(),
        fund_type: "UCITS".to_string(),
        base_currency: "EUR".to_string(),
        domicile: "LU".to_string(),
        isin_master: "LU0000000011".to_string(),
        status: "ACTIVE".to_string(),
    };
    let mut after = existing;
    after.push(created.clone());

    test.clear_mocks();
    let create = test.catalog().create_create_endpoint(&created, 1);
    let list = test.catalog().create_list_endpoint(&after, 1);

    let controller = navigator.controller::<FundMaster>().unwrap();
    controller.add_from_form(&fund_form()).await.unwrap();

    assert_eq!(controller.all().len(), 3);
    controller.set_free_text("euro");
    assert_eq!(controller.visible(), &[created]);
    let notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    create.assert();
    list.assert();

    Ok(())
}

/// Expect a rejected edit to offer a retry that succeeds once the backend recovers
#[tokio::test]
async fn failed_edit_is_retried() -> Result<(), TestError> {
    let original = factory::mock_share_class(1, 1, "EUR", 1_000_000.0);
    let mut test = TestBuilder::new()
        .with_list_endpoint(vec![original.clone()], 1)
        .with_error_endpoint("PUT", "/share_classes/SC000001", 503, "maintenance", 1)
        .build()
        .await?;
    let mut controller = fundbank::controller::ListController::new(
        test.catalog_client::<ShareClass>(),
    );
    controller.load().await.unwrap();

    let patched = ShareClass {
        aum: 2_000_000.0,
        ..original
    };
    let result = controller.edit("SC000001", patched.clone()).await;

    assert!(matches!(result, Err(Error::ApiError(_))));
    let mut notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(
        notifications[0].message,
        "Failed to update: Request failed with status 503: maintenance"
    );
    let retry = notifications.remove(0).retry.unwrap();
    assert_eq!(
        retry,
        RetryAction::Update("SC000001".to_string(), patched.clone())
    );
    test.assert_mocks();

    test.clear_mocks();
    let update = test
        .catalog()
        .create_update_endpoint("SC000001", &patched, 1);
    let list = test.catalog().create_list_endpoint(&[patched.clone()], 1);

    controller.retry(retry).await.unwrap();

    assert_eq!(controller.visible(), &[patched]);
    assert_eq!(controller.last_error(), None);
    update.assert();
    list.assert();

    Ok(())
}

/// Expect a removed record to disappear after the reload
#[tokio::test]
async fn remove_then_reload() -> Result<(), TestError> {
    let funds = vec![factory::mock_fund(1, 1, 1), factory::mock_fund(2, 1, 1)];
    let mut test = TestBuilder::new()
        .with_list_endpoint(funds.clone(), 1)
        .build()
        .await?;
    let mut navigator = test.navigator();
    navigator.controller::<FundMaster>().unwrap().load().await.unwrap();

    test.clear_mocks();
    let delete = test.catalog().create_delete_endpoint::<FundMaster>("F000002", 1);
    let list = test.catalog().create_list_endpoint(&funds[..1], 1);

    let controller = navigator.controller::<FundMaster>().unwrap();
    controller.remove("F000002").await.unwrap();

    assert_eq!(controller.visible(), &funds[..1]);
    assert_eq!(
        controller.take_notifications()[0].message,
        "Fund deleted successfully"
    );
    delete.assert();
    list.assert();

    Ok(())
}
