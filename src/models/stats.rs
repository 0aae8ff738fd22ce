use crate::db::DbResult;
use crate::db::error::DbError;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// The character sheet. One record exists per established session: fetched
/// from the hosted backend, loaded from the local cache, or synthesized
/// with defaults on the anonymous path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Current level (starts at 1)
    pub level: u32,
    /// Hit points remaining
    pub health: u32,
    /// Experience points earned so far
    pub experience: u32,
    /// Raw strength
    pub strength: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            level: 1,
            health: 100,
            experience: 0,
            strength: 10,
        }
    }
}

impl PlayerStats {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            level: row
                .try_get::<_, i32>("level")?
                .try_into()
                .map_err(|_| DbError::Decode("level < 0".into()))?,
            health: row
                .try_get::<_, i32>("health")?
                .try_into()
                .map_err(|_| DbError::Decode("health < 0".into()))?,
            experience: row
                .try_get::<_, i32>("experience")?
                .try_into()
                .map_err(|_| DbError::Decode("experience < 0".into()))?,
            strength: row
                .try_get::<_, i32>("strength")?
                .try_into()
                .map_err(|_| DbError::Decode("strength < 0".into()))?,
        })
    }

    /// Experience needed to reach the next level.
    pub fn xp_for_next_level(&self) -> u32 {
        self.level * 100
    }

    /// Copy with `amount` more experience; every other field unchanged.
    pub fn gained_experience(&self, amount: u32) -> Self {
        Self {
            experience: self.experience + amount,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_defaults() {
        let stats = PlayerStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.health, 100);
        assert_eq!(stats.experience, 0);
        assert_eq!(stats.strength, 10);
    }

    #[test]
    fn t_cache_wire_shape() {
        // The local cache stores exactly this flat object
        let json = serde_json::to_string(&PlayerStats::default()).unwrap();
        assert_eq!(json, r#"{"level":1,"health":100,"experience":0,"strength":10}"#);

        let parsed: PlayerStats =
            serde_json::from_str(r#"{"level":3,"health":80,"experience":250,"strength":15}"#).unwrap();
        assert_eq!(parsed.level, 3);
        assert_eq!(parsed.experience, 250);
    }

    #[test]
    fn t_gained_experience_leaves_rest_alone() {
        let stats = PlayerStats {
            level: 3,
            health: 80,
            experience: 250,
            strength: 15,
        };
        let after = stats.gained_experience(10);
        assert_eq!(after.experience, 260);
        assert_eq!(after.level, 3);
        assert_eq!(after.health, 80);
        assert_eq!(after.strength, 15);
    }

    #[test]
    fn t_xp_curve() {
        assert_eq!(PlayerStats::default().xp_for_next_level(), 100);
        let lvl3 = PlayerStats {
            level: 3,
            ..Default::default()
        };
        assert_eq!(lvl3.xp_for_next_level(), 300);
    }
}
