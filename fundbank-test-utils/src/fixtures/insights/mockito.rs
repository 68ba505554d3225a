//! Insights HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::insights::InsightsFixtures;

impl<'a> InsightsFixtures<'a> {
    /// Create a mock `GET` endpoint at `path` returning `body` as JSON.
    ///
    /// # Arguments
    /// - `path` - Request path including the leading `/`, e.g. `/ai/stats`
    /// - `body` - JSON body to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /ai/recommendations?top_n=<top_n>` endpoint.
    pub fn create_recommendations_endpoint(
        &mut self,
        top_n: u32,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/ai/recommendations")
            .match_query(Matcher::UrlEncoded("top_n".into(), top_n.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
