use crate::db::repo::StatsRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::stats::PlayerStats;
use crate::models::types::ProfileId;
use std::sync::Arc;

pub struct StatsRepository {
    db: Arc<Db>,
}

impl StatsRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait::async_trait]
impl StatsRepo for StatsRepository {
    async fn get_for_profile(&self, profile_id: ProfileId) -> DbResult<Option<PlayerStats>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                SELECT level, health, experience, strength FROM stats
                WHERE profile_id = $1
                "#,
            )
            .await?;

        let row_opt = client.query_opt(&stmt, &[&profile_id]).await?;
        map_row_opt(
            row_opt,
            PlayerStats::try_from_row,
            &format!("StatsRepo::get_for_profile profile_id={}", profile_id),
        )
    }

    async fn insert_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                INSERT INTO stats (profile_id, level, health, experience, strength)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .await?;

        client
            .execute(
                &stmt,
                &[
                    &profile_id,
                    &(stats.level as i32),
                    &(stats.health as i32),
                    &(stats.experience as i32),
                    &(stats.strength as i32),
                ],
            )
            .await?;

        Ok(())
    }

    async fn update_stats(&self, profile_id: ProfileId, stats: &PlayerStats) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                UPDATE stats
                SET level = $2, health = $3, experience = $4, strength = $5, updated_at = NOW()
                WHERE profile_id = $1
                "#,
            )
            .await?;

        client
            .execute(
                &stmt,
                &[
                    &profile_id,
                    &(stats.level as i32),
                    &(stats.health as i32),
                    &(stats.experience as i32),
                    &(stats.strength as i32),
                ],
            )
            .await?;

        Ok(())
    }
}
