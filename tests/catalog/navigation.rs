use fundbank::{
    controller::PinnedFilter,
    entity::{EntityKind, FundMaster, ShareClass, SubFund},
};

use super::*;

/// Expect a fund's id to drill into its sub-funds and share classes, and back to the fund
#[tokio::test]
async fn fund_drill_down_and_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(
            vec![
                factory::mock_sub_fund(1, 1),
                factory::mock_sub_fund(2, 2),
                factory::mock_sub_fund(3, 1),
            ],
            1,
        )
        .with_list_endpoint(
            vec![
                factory::mock_share_class(1, 1, "EUR", 4_000_000.0),
                factory::mock_share_class(2, 2, "USD", 9_000_000.0),
                factory::mock_share_class(3, 1, "USD", 7_500_000.0),
            ],
            1,
        )
        .with_list_endpoint(
            vec![factory::mock_fund(1, 1, 1), factory::mock_fund(2, 1, 1)],
            1,
        )
        .build()
        .await?;
    let mut navigator = test.navigator();
    let fund_id = factory::fund_id(1);

    let route = navigator
        .navigate_to(EntityKind::FundMaster, "fundId", &fund_id, EntityKind::SubFund)
        .unwrap();
    assert_eq!(
        route.pinned,
        Some(PinnedFilter {
            field: "parentFundId",
            value: fund_id.clone(),
        })
    );
    let sub_funds = navigator.controller::<SubFund>().unwrap();
    sub_funds.load().await.unwrap();
    let ids: Vec<&str> = sub_funds
        .visible()
        .iter()
        .map(|sub_fund| sub_fund.subfund_id.as_str())
        .collect();
    assert_eq!(ids, vec!["SF000001", "SF000003"]);

    navigator
        .navigate_to(EntityKind::FundMaster, "FUND_ID", &fund_id, EntityKind::ShareClass)
        .unwrap();
    let share_classes = navigator.controller::<ShareClass>().unwrap();
    share_classes.load().await.unwrap();
    share_classes.sort_by("AUM").unwrap();
    let ids: Vec<&str> = share_classes
        .visible()
        .iter()
        .map(|share_class| share_class.sc_id.as_str())
        .collect();
    assert_eq!(ids, vec!["SC000003", "SC000001"]);

    let route = navigator
        .navigate(EntityKind::ShareClass, "fundId", &fund_id)
        .unwrap();
    assert_eq!(route.kind, EntityKind::FundMaster);
    let funds = navigator.controller::<FundMaster>().unwrap();
    funds.load().await.unwrap();
    assert_eq!(funds.visible().len(), 1);
    assert_eq!(funds.visible()[0].fund_id, fund_id);

    // Earlier screens stay open with their filters
    assert!(navigator.is_open(EntityKind::SubFund));
    assert_eq!(
        navigator.show(EntityKind::SubFund).pinned.map(|pin| pin.value),
        Some(fund_id)
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a closed screen to come back without its filter
#[tokio::test]
async fn closed_screen_starts_fresh() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut navigator = test.navigator();

    navigator
        .navigate(EntityKind::SubFund, "parentFundId", "F000001")
        .unwrap();
    assert!(navigator.show(EntityKind::FundMaster).pinned.is_some());

    navigator.close(EntityKind::FundMaster);

    assert!(!navigator.is_open(EntityKind::FundMaster));
    assert_eq!(navigator.show(EntityKind::FundMaster).pinned, None);

    Ok(())
}
