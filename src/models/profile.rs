use crate::db::DbResult;
use crate::error::{AppResult, DomainError};
use crate::models::types::ProfileId;
use tokio_postgres::Row;

#[derive(Debug, Clone)]
pub struct Profile {
    /// Unique profile ID
    pub id: ProfileId,
    /// Username (distinct)
    pub username: String,
    /// Hashed password (argon)
    pub password_hash: String,
    /// Profile creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last login timestamp
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, ProfileId>("id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
            last_login: row.try_get("last_login")?,
        })
    }

    pub fn validate_username(s: &str) -> AppResult<()> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::Validation {
                field: "username",
                message: "cannot be empty".into(),
            });
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) {
            return Err(DomainError::Validation {
                field: "username",
                message: "only alphanumeric, hyphen, underscore allowed".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_username_rules() {
        assert!(Profile::validate_username("Nova_7").is_ok());
        assert!(Profile::validate_username("rogue-one").is_ok());
        assert!(Profile::validate_username("").is_err());
        assert!(Profile::validate_username("   ").is_err());
        assert!(Profile::validate_username("bad name").is_err());
        assert!(Profile::validate_username("no@mail").is_err());
    }
}
