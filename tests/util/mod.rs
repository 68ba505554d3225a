//! Helpers wiring the library's clients to a mock backend.

use fundbank::{
    api::{ApiClient, CatalogClient, InsightsClient},
    controller::Navigator,
    entity::Entity,
    session::Session,
};
use fundbank_test_utils::TestSetup;

/// Extension trait for TestSetup to build clients pointed at its mock server
pub trait TestSetupExt {
    fn api_client(&self) -> ApiClient;

    fn catalog_client<E: Entity>(&self) -> CatalogClient<E> {
        CatalogClient::new(self.api_client())
    }

    fn insights_client(&self) -> InsightsClient {
        InsightsClient::new(self.api_client())
    }

    fn navigator(&self) -> Navigator {
        Navigator::new(self.api_client())
    }
}

impl TestSetupExt for TestSetup {
    fn api_client(&self) -> ApiClient {
        let session = Session::new(&self.url(), None).expect("mock server URL is valid");
        ApiClient::new(&session).expect("HTTP client builds")
    }
}
