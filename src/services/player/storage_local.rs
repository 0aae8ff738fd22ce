use crate::error::AppResult;
use crate::models::inventory::{InventoryItem, normalize_slots};
use crate::models::stats::PlayerStats;
use crate::services::player::PlayerStorage;
use crate::store::LocalStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Local-store key for cached stats.
pub const STATS_KEY: &str = "playerStats";
/// Local-store key for cached inventory slots.
pub const INVENTORY_KEY: &str = "inventory";

/// Anonymous-session storage over the local key-value store.
pub struct LocalStorage {
    store: Arc<LocalStore>,
}

impl LocalStorage {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PlayerStorage for LocalStorage {
    /// Read-through with default backfill: a missing or unparsable cache is
    /// replaced with defaults, persisted immediately so later reads are
    /// stable.
    async fn fetch_stats(&self) -> AppResult<PlayerStats> {
        if let Some(raw) = self.store.get(STATS_KEY)
            && let Ok(stats) = serde_json::from_str::<PlayerStats>(&raw)
        {
            return Ok(stats);
        }

        let defaults = PlayerStats::default();
        self.store.set(STATS_KEY, serde_json::to_string(&defaults)?)?;
        Ok(defaults)
    }

    async fn store_stats(&self, stats: &PlayerStats) -> AppResult<()> {
        self.store.set(STATS_KEY, serde_json::to_string(stats)?)
    }

    /// Serves the cached slots (or none) and writes the normalized list
    /// back, so the cache always holds the padded shape it last served.
    async fn fetch_inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let items = self
            .store
            .get(INVENTORY_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<InventoryItem>>(&raw).ok())
            .unwrap_or_default();

        let items = normalize_slots(items);
        self.store.set(INVENTORY_KEY, serde_json::to_string(&items)?)?;
        Ok(items)
    }
}
