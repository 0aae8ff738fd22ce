use crate::db::repo::ProfileRepo;
use crate::error::AppResult;
use crate::models::profile::Profile;
use crate::models::types::ProfileId;
use std::sync::Arc;

/// Which storage target owns this request's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScope {
    /// A confirmed principal; records live in the hosted backend.
    Authenticated(ProfileId),
    /// No principal; records live in the local store only.
    Anonymous,
}

/// Decides, on every data-dependent command, on whose behalf the request
/// runs. The scope is re-evaluated each time; nothing transitions between
/// the two states.
pub struct SessionResolver {
    repo: Arc<dyn ProfileRepo>,
}

impl SessionResolver {
    pub fn new(repo: Arc<dyn ProfileRepo>) -> Self {
        Self { repo }
    }

    /// A missing principal is a normal outcome, never an error. An error
    /// here means the identity provider itself failed and authentication is
    /// indeterminate; callers render it as a generic fetch failure.
    pub async fn resolve(&self, current: Option<&Profile>) -> AppResult<SessionScope> {
        let Some(profile) = current else {
            return Ok(SessionScope::Anonymous);
        };

        match self.repo.get_by_id(profile.id).await? {
            Some(_) => Ok(SessionScope::Authenticated(profile.id)),
            None => Ok(SessionScope::Anonymous),
        }
    }
}
