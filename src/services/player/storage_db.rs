use crate::db::repo::{InventoryRepo, StatsRepo};
use crate::error::{AppResult, DomainError};
use crate::models::inventory::{INVENTORY_SIZE, InventoryItem};
use crate::models::stats::PlayerStats;
use crate::models::types::ProfileId;
use crate::services::player::PlayerStorage;
use async_trait::async_trait;
use std::sync::Arc;

/// Hosted-backend storage for one authenticated profile.
pub struct RemoteStorage {
    stats_repo: Arc<dyn StatsRepo>,
    inventory_repo: Arc<dyn InventoryRepo>,
    profile_id: ProfileId,
}

impl RemoteStorage {
    pub fn new(
        stats_repo: Arc<dyn StatsRepo>,
        inventory_repo: Arc<dyn InventoryRepo>,
        profile_id: ProfileId,
    ) -> Self {
        Self {
            stats_repo,
            inventory_repo,
            profile_id,
        }
    }
}

#[async_trait]
impl PlayerStorage for RemoteStorage {
    /// Exactly one record is expected per profile. A profile whose stats
    /// were never seeded is a missing record, not a fresh default.
    async fn fetch_stats(&self) -> AppResult<PlayerStats> {
        let stats = self.stats_repo.get_for_profile(self.profile_id).await?;
        stats.ok_or_else(|| DomainError::NotFound("stats".into()))
    }

    async fn store_stats(&self, stats: &PlayerStats) -> AppResult<()> {
        self.stats_repo.update_stats(self.profile_id, stats).await?;
        Ok(())
    }

    async fn fetch_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let items = self
            .inventory_repo
            .get_for_profile(self.profile_id, INVENTORY_SIZE as i64)
            .await?;
        Ok(items)
    }
}
