use crate::db::repo::ProfileRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::profile::Profile;
use crate::models::types::ProfileId;
use std::sync::Arc;

pub struct ProfileRepository {
    db: Arc<Db>,
}

impl ProfileRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait::async_trait]
impl ProfileRepo for ProfileRepository {
    async fn get_by_username(&self, username: &str) -> DbResult<Option<Profile>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM profiles WHERE username = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&username]).await?;
        map_row_opt(
            row_opt,
            Profile::try_from_row,
            &format!("ProfileRepo::get_by_username username={}", username),
        )
    }

    async fn get_by_id(&self, profile_id: ProfileId) -> DbResult<Option<Profile>> {
        let client = self.db.get_client().await?;

        let stmt = client.prepare_cached("SELECT * FROM profiles WHERE id = $1").await?;

        let row_opt = client.query_opt(&stmt, &[&profile_id]).await?;
        map_row_opt(
            row_opt,
            Profile::try_from_row,
            &format!("ProfileRepo::get_by_id id={}", profile_id),
        )
    }

    async fn insert_profile(&self, profile: Profile) -> DbResult<Profile> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
                INSERT INTO profiles (id, username, password_hash)
                VALUES ($1, $2, $3)
                RETURNING *
                "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&profile.id, &profile.username, &profile.password_hash])
            .await?;

        Profile::try_from_row(&row)
    }

    async fn update_username(&self, profile_id: ProfileId, username: &str) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("UPDATE profiles SET username = $2 WHERE id = $1")
            .await?;
        client.execute(&stmt, &[&profile_id, &username]).await?;

        Ok(())
    }

    async fn update_last_login(&self, profile_id: ProfileId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("UPDATE profiles SET last_login = NOW() WHERE id = $1")
            .await?;
        client.execute(&stmt, &[&profile_id]).await?;

        Ok(())
    }
}
