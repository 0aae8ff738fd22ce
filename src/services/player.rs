use crate::db::repo::{InventoryRepo, StatsRepo};
use crate::error::AppResult;
use crate::models::inventory::{InventoryItem, normalize_slots};
use crate::models::stats::PlayerStats;
use crate::models::types::ProfileId;
use crate::services::session::SessionScope;
use crate::store::LocalStore;
use async_trait::async_trait;
use std::sync::Arc;

mod storage_db;
mod storage_local;

pub use storage_db::RemoteStorage;
pub use storage_local::LocalStorage;

/// Read/write player records for one identity scope. Each implementation
/// owns its read semantics: the remote side treats a missing stats record
/// as an error and never writes on read; the local side backfills defaults
/// and caches what it served.
#[async_trait]
pub trait PlayerStorage: Send + Sync {
    async fn fetch_stats(&self) -> AppResult<PlayerStats>;
    async fn store_stats(&self, stats: &PlayerStats) -> AppResult<()>;
    async fn fetch_inventory(&self) -> AppResult<Vec<InventoryItem>>;
}

/// Reconciles player state (stats, inventory slots) against whichever
/// storage target the session scope selects.
pub struct PlayerService {
    stats_repo: Arc<dyn StatsRepo>,
    inventory_repo: Arc<dyn InventoryRepo>,
    store: Arc<LocalStore>,
}

impl PlayerService {
    pub fn new(
        stats_repo: Arc<dyn StatsRepo>,
        inventory_repo: Arc<dyn InventoryRepo>,
        store: Arc<LocalStore>,
    ) -> Self {
        Self {
            stats_repo,
            inventory_repo,
            store,
        }
    }

    /// The single place the remote/local branch is taken.
    fn storage_for(&self, scope: &SessionScope) -> Box<dyn PlayerStorage> {
        match scope {
            SessionScope::Authenticated(profile_id) => Box::new(RemoteStorage::new(
                self.stats_repo.clone(),
                self.inventory_repo.clone(),
                *profile_id,
            )),
            SessionScope::Anonymous => Box::new(LocalStorage::new(self.store.clone())),
        }
    }

    pub async fn stats(&self, scope: &SessionScope) -> AppResult<PlayerStats> {
        self.storage_for(scope).fetch_stats().await
    }

    /// Always exactly `INVENTORY_SIZE` slots, in original order.
    pub async fn inventory(&self, scope: &SessionScope) -> AppResult<Vec<InventoryItem>> {
        let items = self.storage_for(scope).fetch_inventory().await?;
        Ok(normalize_slots(items))
    }

    /// Persist mutated stats to the scope's target. The branch is taken
    /// fresh on every call.
    pub async fn update_stats(&self, scope: &SessionScope, stats: &PlayerStats) -> AppResult<()> {
        self.storage_for(scope).store_stats(stats).await
    }

    /// Seed the hosted stats record for a freshly registered profile.
    pub async fn initialize(&self, profile_id: ProfileId) -> AppResult<()> {
        self.stats_repo
            .insert_stats(profile_id, &PlayerStats::default())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::storage_local::{INVENTORY_KEY, STATS_KEY};
    use super::*;
    use crate::db::DbResult;
    use crate::models::inventory::INVENTORY_SIZE;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MemStatsRepo {
        rows: Mutex<HashMap<ProfileId, PlayerStats>>,
    }

    impl MemStatsRepo {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
            }
        }

        fn with(profile_id: ProfileId, stats: PlayerStats) -> Self {
            let repo = Self::new();
            repo.rows.lock().insert(profile_id, stats);
            repo
        }
    }

    #[async_trait]
    impl StatsRepo for MemStatsRepo {
        async fn get_for_profile(&self, profile_id: ProfileId) -> DbResult<Option<PlayerStats>> {
            Ok(self.rows.lock().get(&profile_id).copied())
        }

        async fn insert_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()> {
            self.rows.lock().insert(profile_id, *stats);
            Ok(())
        }

        async fn update_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()> {
            self.rows.lock().insert(profile_id, *stats);
            Ok(())
        }
    }

    struct MemInventoryRepo {
        rows: Vec<InventoryItem>,
    }

    #[async_trait]
    impl InventoryRepo for MemInventoryRepo {
        async fn get_for_profile(&self, _profile_id: ProfileId, limit: i64) -> DbResult<Vec<InventoryItem>> {
            Ok(self.rows.iter().take(limit as usize).cloned().collect())
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("wanderer-player-{}.json", uuid::Uuid::new_v4()))
    }

    fn service_with(stats_repo: MemStatsRepo, items: Vec<InventoryItem>) -> (PlayerService, Arc<LocalStore>) {
        let store = Arc::new(LocalStore::open(temp_path()));
        let service = PlayerService::new(
            Arc::new(stats_repo),
            Arc::new(MemInventoryRepo { rows: items }),
            store.clone(),
        );
        (service, store)
    }

    fn item(n: usize) -> InventoryItem {
        InventoryItem {
            id: format!("item-{n}"),
            name: format!("Item {n}"),
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn t_anonymous_empty_cache_synthesizes_and_persists_defaults() {
        let (service, store) = service_with(MemStatsRepo::new(), vec![]);
        let scope = SessionScope::Anonymous;

        let stats = service.stats(&scope).await.unwrap();
        assert_eq!(stats, PlayerStats::default());

        // defaults were written through so later reads are stable
        let raw = store.get(STATS_KEY).unwrap();
        let cached: PlayerStats = serde_json::from_str(&raw).unwrap();
        assert_eq!(cached, PlayerStats::default());

        // reading twice yields the same output and does not rewrite
        let again = service.stats(&scope).await.unwrap();
        assert_eq!(again, stats);
        assert_eq!(store.get(STATS_KEY).unwrap(), raw);
    }

    #[tokio::test]
    async fn t_anonymous_reads_existing_cache() {
        let (service, store) = service_with(MemStatsRepo::new(), vec![]);
        store
            .set(STATS_KEY, r#"{"level":3,"health":80,"experience":250,"strength":15}"#)
            .unwrap();

        let stats = service.stats(&SessionScope::Anonymous).await.unwrap();
        assert_eq!(
            stats,
            PlayerStats {
                level: 3,
                health: 80,
                experience: 250,
                strength: 15
            }
        );
    }

    #[tokio::test]
    async fn t_anonymous_corrupt_cache_replaced_with_defaults() {
        let (service, store) = service_with(MemStatsRepo::new(), vec![]);
        store.set(STATS_KEY, "definitely not stats").unwrap();

        let stats = service.stats(&SessionScope::Anonymous).await.unwrap();
        assert_eq!(stats, PlayerStats::default());

        let cached: PlayerStats = serde_json::from_str(&store.get(STATS_KEY).unwrap()).unwrap();
        assert_eq!(cached, PlayerStats::default());
    }

    #[tokio::test]
    async fn t_authenticated_fetch_returns_stored_record_without_writing() {
        let profile_id = ProfileId::new();
        let stored = PlayerStats {
            level: 2,
            health: 90,
            experience: 130,
            strength: 12,
        };
        let (service, store) = service_with(MemStatsRepo::with(profile_id, stored), vec![]);

        let stats = service.stats(&SessionScope::Authenticated(profile_id)).await.unwrap();
        assert_eq!(stats, stored);

        // the remote path never touches the local cache
        assert_eq!(store.get(STATS_KEY), None);
    }

    #[tokio::test]
    async fn t_authenticated_never_initialized_is_an_error() {
        let (service, _store) = service_with(MemStatsRepo::new(), vec![]);

        let result = service.stats(&SessionScope::Authenticated(ProfileId::new())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn t_anonymous_inventory_pads_and_caches() {
        let (service, store) = service_with(MemStatsRepo::new(), vec![]);
        let scope = SessionScope::Anonymous;

        let slots = service.inventory(&scope).await.unwrap();
        assert_eq!(slots.len(), INVENTORY_SIZE);
        assert!(slots.iter().all(|s| s.is_placeholder()));

        let cached: Vec<InventoryItem> = serde_json::from_str(&store.get(INVENTORY_KEY).unwrap()).unwrap();
        assert_eq!(cached, slots);
    }

    #[tokio::test]
    async fn t_anonymous_inventory_keeps_cached_items_in_order() {
        let (service, store) = service_with(MemStatsRepo::new(), vec![]);
        store
            .set(INVENTORY_KEY, serde_json::to_string(&vec![item(1), item(2)]).unwrap())
            .unwrap();

        let slots = service.inventory(&SessionScope::Anonymous).await.unwrap();
        assert_eq!(slots.len(), INVENTORY_SIZE);
        assert_eq!(slots[0], item(1));
        assert_eq!(slots[1], item(2));
        assert!(slots[2..].iter().all(|s| s.is_placeholder()));
    }

    #[tokio::test]
    async fn t_authenticated_inventory_normalized_to_slot_count() {
        let profile_id = ProfileId::new();
        let items: Vec<_> = (0..8).map(item).collect();
        let (service, _store) = service_with(MemStatsRepo::with(profile_id, PlayerStats::default()), items.clone());

        let slots = service
            .inventory(&SessionScope::Authenticated(profile_id))
            .await
            .unwrap();
        assert_eq!(slots.len(), INVENTORY_SIZE);
        assert_eq!(&slots[..], &items[..INVENTORY_SIZE]);
    }

    #[tokio::test]
    async fn t_update_stats_routes_by_scope() {
        let profile_id = ProfileId::new();
        let repo = MemStatsRepo::with(profile_id, PlayerStats::default());
        let store = Arc::new(LocalStore::open(temp_path()));
        let repo = Arc::new(repo);
        let service = PlayerService::new(
            repo.clone(),
            Arc::new(MemInventoryRepo { rows: vec![] }),
            store.clone(),
        );

        let bumped = PlayerStats::default().gained_experience(10);

        service
            .update_stats(&SessionScope::Authenticated(profile_id), &bumped)
            .await
            .unwrap();
        assert_eq!(repo.rows.lock().get(&profile_id).copied(), Some(bumped));
        assert_eq!(store.get(STATS_KEY), None);

        service.update_stats(&SessionScope::Anonymous, &bumped).await.unwrap();
        let cached: PlayerStats = serde_json::from_str(&store.get(STATS_KEY).unwrap()).unwrap();
        assert_eq!(cached, bumped);
    }

    #[tokio::test]
    async fn t_initialize_seeds_remote_defaults() {
        let repo = Arc::new(MemStatsRepo::new());
        let service = PlayerService::new(
            repo.clone(),
            Arc::new(MemInventoryRepo { rows: vec![] }),
            Arc::new(LocalStore::open(temp_path())),
        );

        let profile_id = ProfileId::new();
        service.initialize(profile_id).await.unwrap();
        assert_eq!(repo.rows.lock().get(&profile_id).copied(), Some(PlayerStats::default()));
    }
}
