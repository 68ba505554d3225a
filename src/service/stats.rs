//! Aggregate figures for the analytics dashboard.
//!
//! Only the data is produced here; drawing the charts is up to the presentation layer.

use entity::{FundMaster, LegalEntity, ShareClass};

use crate::{api::CatalogClient, error::Error};

/// Number of share classes included in the AUM series.
pub const AUM_SERIES_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    /// Legal entities per entity type, in first-seen order
    pub entity_types: Vec<(String, usize)>,
    /// Funds per status, in first-seen order
    pub fund_statuses: Vec<(String, usize)>,
    /// Share classes per currency, in first-seen order
    pub currencies: Vec<(String, usize)>,
    /// `(scId, AUM in millions)` of the first share classes in backend order
    pub aum_millions: Vec<(String, f64)>,
    pub legal_entity_count: usize,
    pub fund_count: usize,
    pub share_class_count: usize,
    pub total_aum: f64,
}

impl CatalogStats {
    pub fn compute(
        legal_entities: &[LegalEntity],
        funds: &[FundMaster],
        share_classes: &[ShareClass],
    ) -> Self {
        Self {
            entity_types: count_by(legal_entities.iter().map(|le| le.entity_type.as_str())),
            fund_statuses: count_by(funds.iter().map(|fund| fund.status.as_str())),
            currencies: count_by(share_classes.iter().map(|sc| sc.currency.as_str())),
            aum_millions: share_classes
                .iter()
                .take(AUM_SERIES_LEN)
                .map(|sc| (sc.sc_id.clone(), sc.aum / 1_000_000.0))
                .collect(),
            legal_entity_count: legal_entities.len(),
            fund_count: funds.len(),
            share_class_count: share_classes.len(),
            total_aum: share_classes.iter().map(|sc| sc.aum).sum(),
        }
    }
}

/// Counts occurrences, keeping groups in the order their key first appears.
fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match counts.iter_mut().find(|(seen, _)| seen == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }

    counts
}

pub struct StatsService<'a> {
    legal_entities: &'a CatalogClient<LegalEntity>,
    funds: &'a CatalogClient<FundMaster>,
    share_classes: &'a CatalogClient<ShareClass>,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(
        legal_entities: &'a CatalogClient<LegalEntity>,
        funds: &'a CatalogClient<FundMaster>,
        share_classes: &'a CatalogClient<ShareClass>,
    ) -> Self {
        Self {
            legal_entities,
            funds,
            share_classes,
        }
    }

    /// Fetches the three source lists concurrently and aggregates them.
    ///
    /// Fails as a whole if any of the lists cannot be fetched.
    pub async fn load(&self) -> Result<CatalogStats, Error> {
        let (legal_entities, funds, share_classes) = futures::try_join!(
            self.legal_entities.list(),
            self.funds.list(),
            self.share_classes.list()
        )?;

        Ok(CatalogStats::compute(&legal_entities, &funds, &share_classes))
    }
}
