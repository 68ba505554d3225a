//! Test configuration constants.
//!
//! These values are not real credentials but placeholders for mock servers.

/// Bearer token attached by clients built for authenticated tests.
///
/// Mock endpoints created with [`match_auth`](crate::fixtures::catalog::CatalogFixtures::match_auth)
/// only answer requests carrying `Authorization: Bearer <TEST_AUTH_TOKEN>`.
pub static TEST_AUTH_TOKEN: &str = "test_auth_token";
