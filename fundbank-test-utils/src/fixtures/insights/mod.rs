use crate::TestSetup;

pub mod data;
pub mod mockito;

impl TestSetup {
    pub fn insights<'a>(&'a mut self) -> InsightsFixtures<'a> {
        InsightsFixtures { setup: self }
    }
}

pub struct InsightsFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
