use crate::db::repo::InventoryRepo;
use crate::db::{Db, DbResult};
use crate::models::inventory::InventoryItem;
use crate::models::types::ProfileId;
use std::sync::Arc;

pub struct InventoryRepository {
    db: Arc<Db>,
}

impl InventoryRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait::async_trait]
impl InventoryRepo for InventoryRepository {
    async fn get_for_profile(&self, profile_id: ProfileId, limit: i64) -> DbResult<Vec<InventoryItem>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                SELECT id, name, quantity FROM inventory
                WHERE profile_id = $1
                ORDER BY slot
                LIMIT $2
                "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&profile_id, &limit]).await?;
        rows.iter().map(InventoryItem::try_from_row).collect()
    }
}
