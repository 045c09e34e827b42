//! Catalog lifecycle: seeding and reset to the built-in dataset

use shared::defaults::{default_lots, default_properties};

use crate::db::DbService;
use crate::db::repository::{LotRepository, PropertyRepository, RepoResult};

/// What a seed pass inserted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub properties: usize,
    pub lots: usize,
}

#[derive(Clone)]
pub struct CatalogService {
    properties: PropertyRepository,
    lots: LotRepository,
}

impl CatalogService {
    pub fn new(db: DbService) -> Self {
        Self {
            properties: PropertyRepository::new(db.clone()),
            lots: LotRepository::new(db),
        }
    }

    /// Insert the defaults into each collection that is empty
    ///
    /// A collection that already holds documents is left as is; nothing is
    /// merged into it.
    pub async fn seed_if_empty(&self) -> RepoResult<SeedReport> {
        let mut report = SeedReport::default();

        if self.properties.count().await? == 0 {
            report.properties = self.properties.insert_many(default_properties()).await?;
            tracing::info!(count = report.properties, "Seeded default properties");
        }

        if self.lots.count().await? == 0 {
            report.lots = self.lots.insert_many(default_lots()).await?;
            tracing::info!(count = report.lots, "Seeded default lots");
        }

        Ok(report)
    }

    /// Wipe both collections and restore the defaults with their fixed ids
    pub async fn reset(&self) -> RepoResult<SeedReport> {
        let report = SeedReport {
            properties: self.properties.replace_all(default_properties()).await?,
            lots: self.lots.replace_all(default_lots()).await?,
        };
        tracing::info!(
            properties = report.properties,
            lots = report.lots,
            "Catalog reset to defaults"
        );
        Ok(report)
    }
}
