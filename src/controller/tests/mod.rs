mod load;
mod write;

use entity::Entity;
use fundbank_test_utils::prelude::*;

use super::*;
use crate::{
    api::{ApiClient, CatalogClient},
    error::Error,
    session::Session,
};

/// Nothing listens on port 1, so every request fails at the transport level.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn api_client(url: &str) -> ApiClient {
    let session = Session::new(url, None).unwrap();
    ApiClient::new(&session).unwrap()
}

fn list_controller<E: Entity>(test: &TestSetup) -> ListController<E> {
    ListController::new(CatalogClient::new(api_client(&test.url())))
}

/// A controller that has completed one successful load of `records`.
async fn loaded_controller<E: Entity>(
    records: Vec<E>,
) -> Result<(TestSetup, ListController<E>), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint(records, 1)
        .build()
        .await?;
    let mut controller = list_controller::<E>(&test);

    controller
        .load()
        .await
        .map_err(|e| TestError::Unexpected(e.to_string()))?;

    Ok((test, controller))
}

/// A load response carrying a real transport failure.
async fn transport_failure<E: Entity>(generation: u64) -> LoadResponse<E> {
    let offline = CatalogClient::<E>::new(api_client(UNREACHABLE_URL));

    LoadResponse {
        generation,
        result: offline.list().await,
    }
}
