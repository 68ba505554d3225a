//! Catalog HTTP mock endpoint creation utilities.
//!
//! Endpoints mirror the backend's REST layout: `/<path>` for the collection and
//! `/<path>/{id}` for one record, with records serialized under their wire names.

use entity::Entity;
use mockito::{Matcher, Mock};

use crate::{constant::TEST_AUTH_TOKEN, fixtures::catalog::CatalogFixtures};

impl<'a> CatalogFixtures<'a> {
    fn mock(&mut self, method: &str, path: &str) -> Mock {
        let mock = self.setup.server.mock(method, path);
        if self.auth {
            mock.match_header(
                "authorization",
                format!("Bearer {}", TEST_AUTH_TOKEN).as_str(),
            )
        } else {
            mock
        }
    }

    /// Create a mock `GET /<path>` endpoint returning `records`.
    ///
    /// # Arguments
    /// - `records` - Records to return, in order
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_list_endpoint<E: Entity>(
        &mut self,
        records: &[E],
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}", E::KIND.schema().path);

        self.mock("GET", &path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(records).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /<path>/{id}` endpoint returning `record`.
    pub fn create_get_endpoint<E: Entity>(&mut self, record: &E, expected_requests: usize) -> Mock {
        let path = format!("/{}/{}", E::KIND.schema().path, record.primary_key());

        self.mock("GET", &path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(record).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /<path>` endpoint that accepts exactly `record`.
    ///
    /// The request body must serialize to the same JSON as `record`, so the mock also
    /// verifies the proposed primary key.
    pub fn create_create_endpoint<E: Entity>(
        &mut self,
        record: &E,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}", E::KIND.schema().path);

        self.mock("POST", &path)
            .match_body(Matcher::Json(serde_json::to_value(record).unwrap()))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "created"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `PUT /<path>/{id}` endpoint that accepts exactly `record`.
    pub fn create_update_endpoint<E: Entity>(
        &mut self,
        id: &str,
        record: &E,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/{}/{}", E::KIND.schema().path, id);

        self.mock("PUT", &path)
            .match_body(Matcher::Json(serde_json::to_value(record).unwrap()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "updated"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `DELETE /<path>/{id}` endpoint answering with an empty 204.
    pub fn create_delete_endpoint<E: Entity>(&mut self, id: &str, expected_requests: usize) -> Mock {
        let path = format!("/{}/{}", E::KIND.schema().path, id);

        self.mock("DELETE", &path)
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `status` with an `{"error": message}` body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match, including the leading `/`
    /// - `status` - Status code to return
    /// - `message` - Error message placed in the body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "error": message }).to_string())
            .expect(expected_requests)
            .create()
    }
}
