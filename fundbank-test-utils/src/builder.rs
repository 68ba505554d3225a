//! Declarative test builder.
//!
//! Queues records and endpoints, then creates every mock on a fresh server in `build()`.

use entity::Entity;
use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

type EndpointBuilder = Box<dyn FnOnce(&mut TestSetup) -> Mock>;

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete test
/// setup. Endpoints are created in the order they were queued, which matters when two mocks
/// match the same request.
pub struct TestBuilder {
    auth: bool,
    endpoints: Vec<EndpointBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            auth: false,
            endpoints: Vec::new(),
        }
    }

    /// Require the test bearer token on catalog endpoints queued after this call.
    pub fn with_auth(mut self) -> Self {
        self.auth = true;
        self
    }

    fn push<F>(mut self, endpoint: F) -> Self
    where
        F: FnOnce(&mut TestSetup, bool) -> Mock + 'static,
    {
        let auth = self.auth;
        self.endpoints
            .push(Box::new(move |setup: &mut TestSetup| endpoint(setup, auth)));
        self
    }

    /// Serve `records` from `GET /<path>` of their kind.
    ///
    /// # Arguments
    /// - `records` - Records returned by the endpoint
    /// - `expected_requests` - Number of times the endpoint should be called
    pub fn with_list_endpoint<E: Entity>(self, records: Vec<E>, expected_requests: usize) -> Self {
        self.push(move |setup, auth| {
            let fixtures = setup.catalog();
            let mut fixtures = if auth { fixtures.match_auth() } else { fixtures };
            fixtures.create_list_endpoint(&records, expected_requests)
        })
    }

    pub fn with_get_endpoint<E: Entity>(self, record: E, expected_requests: usize) -> Self {
        self.push(move |setup, auth| {
            let fixtures = setup.catalog();
            let mut fixtures = if auth { fixtures.match_auth() } else { fixtures };
            fixtures.create_get_endpoint(&record, expected_requests)
        })
    }

    /// Accept a `POST` whose body equals `record`.
    pub fn with_create_endpoint<E: Entity>(self, record: E, expected_requests: usize) -> Self {
        self.push(move |setup, auth| {
            let fixtures = setup.catalog();
            let mut fixtures = if auth { fixtures.match_auth() } else { fixtures };
            fixtures.create_create_endpoint(&record, expected_requests)
        })
    }

    /// Accept a `PUT /<path>/{id}` whose body equals `record`.
    pub fn with_update_endpoint<E: Entity>(
        self,
        id: impl Into<String>,
        record: E,
        expected_requests: usize,
    ) -> Self {
        let id = id.into();
        self.push(move |setup, auth| {
            let fixtures = setup.catalog();
            let mut fixtures = if auth { fixtures.match_auth() } else { fixtures };
            fixtures.create_update_endpoint(&id, &record, expected_requests)
        })
    }

    pub fn with_delete_endpoint<E: Entity>(
        self,
        id: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        let id = id.into();
        self.push(move |setup, auth| {
            let fixtures = setup.catalog();
            let mut fixtures = if auth { fixtures.match_auth() } else { fixtures };
            fixtures.create_delete_endpoint::<E>(&id, expected_requests)
        })
    }

    /// Answer `method path` with `status` and an `{"error": message}` body.
    pub fn with_error_endpoint(
        self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        let message = message.into();
        self.push(move |setup, _| {
            setup
                .catalog()
                .create_error_endpoint(method, &path, status, &message, expected_requests)
        })
    }

    /// Serve a JSON body from `GET path`.
    pub fn with_insight_endpoint(
        self,
        path: impl Into<String>,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        self.push(move |setup, _| {
            setup
                .insights()
                .create_endpoint(&path, &body, expected_requests)
        })
    }

    /// Add a custom mock endpoint using a closure.
    ///
    /// Provides direct access to the mockito server for endpoints not covered by the helper
    /// methods.
    pub fn with_mock_endpoint<F>(self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.push(move |test, _| setup(&mut test.server))
    }

    /// Build the test setup by starting the mock server and creating all queued endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server with every endpoint registered in `mocks`
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for endpoint in self.endpoints {
            let mock = endpoint(&mut setup);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
