
use fundbank_test_utils::prelude::*;

use super::*;
use crate::session::Session;

fn api_client(test: &TestSetup) -> ApiClient {
    let session = Session::new(&test.url(), None).unwrap();
    ApiClient::new(&session).unwrap()
}

fn config(test: &TestSetup) -> Config {
    Config {
        api_url: test.url(),
        api_token: None,
        recommendation_count: 3,
    }
}
