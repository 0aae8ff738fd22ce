use crate::db::DbResult;
use crate::models::stats::PlayerStats;
use crate::models::types::ProfileId;

#[async_trait::async_trait]
pub trait StatsRepo: Send + Sync {
    /// Fetch the stats record owned by this profile, if it was ever seeded.
    async fn get_for_profile(&self, profile_id: ProfileId) -> DbResult<Option<PlayerStats>>;

    /// Seed the stats record for a freshly created profile.
    async fn insert_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()>;

    /// Overwrite the stats record; bumps `updated_at`.
    async fn update_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()>;
}
