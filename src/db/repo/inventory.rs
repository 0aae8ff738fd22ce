use crate::db::DbResult;
use crate::models::inventory::InventoryItem;
use crate::models::types::ProfileId;

#[async_trait::async_trait]
pub trait InventoryRepo: Send + Sync {
    /// Fetch up to `limit` inventory records owned by this profile, in slot
    /// order.
    async fn get_for_profile(&self, profile_id: ProfileId, limit: i64) -> DbResult<Vec<InventoryItem>>;
}
