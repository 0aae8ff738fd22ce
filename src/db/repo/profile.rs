use crate::db::DbResult;
use crate::models::profile::Profile;
use crate::models::types::ProfileId;

#[async_trait::async_trait]
pub trait ProfileRepo: Send + Sync {
    async fn get_by_username(&self, username: &str) -> DbResult<Option<Profile>>;
    async fn get_by_id(&self, profile_id: ProfileId) -> DbResult<Option<Profile>>;
    async fn insert_profile(&self, profile: Profile) -> DbResult<Profile>;
    async fn update_username(&self, profile_id: ProfileId, username: &str) -> DbResult<()>;
    async fn update_last_login(&self, profile_id: ProfileId) -> DbResult<()>;
}
