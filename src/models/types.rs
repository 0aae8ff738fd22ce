use serde::{Deserialize, Serialize};

/// Stable identifier of a profile, the authenticated principal everything
/// else is scoped to.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    postgres_types::ToSql,
    postgres_types::FromSql,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
#[postgres(transparent)]
#[serde(transparent)] // JSON = plain UUID string
pub struct ProfileId(pub uuid::Uuid);

impl ProfileId {
    #[inline]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    #[inline]
    pub fn from_uuid(u: uuid::Uuid) -> Self {
        Self(u)
    }

    #[inline]
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for ProfileId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

impl From<uuid::Uuid> for ProfileId {
    fn from(v: uuid::Uuid) -> Self {
        Self(v)
    }
}

impl From<ProfileId> for uuid::Uuid {
    fn from(v: ProfileId) -> uuid::Uuid {
        v.0
    }
}
