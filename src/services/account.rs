use crate::db::repo::ProfileRepo;
use crate::error::{AppResult, DomainError, LoginError};
use crate::models::profile::Profile;
use crate::models::types::ProfileId;
use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use std::sync::Arc;

pub struct AccountService {
    repo: Arc<dyn ProfileRepo>,
    argon: Argon2<'static>,
}

pub type LoginResult<T> = Result<T, LoginError>;

impl AccountService {
    pub fn new(repo: Arc<dyn ProfileRepo>) -> Self {
        let argon = Argon2::default();
        Self { repo, argon }
    }

    pub async fn exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.repo.get_by_username(username).await?.is_some())
    }

    /// Create a profile for a new credential pair. The caller is expected
    /// to seed initial stats and attach the profile to the session
    /// afterwards.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<Profile> {
        Profile::validate_username(username)?;
        if self.exists(username).await? {
            return Err(DomainError::Validation {
                field: "username",
                message: "already taken".into(),
            });
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon
            .hash_password(password.as_bytes(), &salt)
            .map_err(DomainError::Password)?
            .to_string();

        let profile = Profile {
            id: ProfileId::new(),
            username: username.trim().to_string(),
            password_hash: hash,
            created_at: chrono::Utc::now(),
            last_login: None,
        };

        let profile = self.repo.insert_profile(profile).await?;
        Ok(profile)
    }

    pub async fn login(&self, username: &str, password: &str) -> LoginResult<Profile> {
        // Validate username input
        if Profile::validate_username(username).is_err() {
            return Err(LoginError::UserNotFound);
        }

        let Some(profile) = self
            .repo
            .get_by_username(username)
            .await
            .map_err(|_| LoginError::UserNotFound)?
        else {
            return Err(LoginError::UserNotFound);
        };

        let parsed = PasswordHash::new(&profile.password_hash)
            .map_err(|_| LoginError::InternalError("cannot parse stored password hash".into()))?;
        if self.argon.verify_password(password.as_bytes(), &parsed).is_err() {
            return Err(LoginError::InvalidPassword);
        }

        // We are logged in. Update last login time
        self.repo
            .update_last_login(profile.id)
            .await
            .map_err(|_| LoginError::InternalError("cannot update login timestamp".into()))?;

        Ok(profile)
    }

    /// Settings: change the username of a signed-in profile.
    pub async fn rename(&self, profile_id: ProfileId, username: &str) -> AppResult<()> {
        Profile::validate_username(username)?;
        if self.exists(username).await? {
            return Err(DomainError::Validation {
                field: "username",
                message: "already taken".into(),
            });
        }

        self.repo.update_username(profile_id, username.trim()).await?;
        Ok(())
    }
}
