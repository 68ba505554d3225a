use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures {
            setup: self,
            auth: false,
        }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a mut TestSetup,
    auth: bool,
}

impl<'a> CatalogFixtures<'a> {
    /// Only match requests carrying the test bearer token.
    pub fn match_auth(mut self) -> Self {
        self.auth = true;
        self
    }
}
