
use fundbank_test_utils::prelude::*;

use super::*;

fn api_client(test: &TestSetup) -> ApiClient {
    let session = Session::new(&test.url(), None).unwrap();
    ApiClient::new(&session).unwrap()
}
