//! SUUID: a UUID carried as its base62 encoding.
//!
//! UUID generation itself is delegated to the `uuid` crate; this type only
//! changes how the value is written down.

use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::base62::{decode_u128, encode_u128};
use crate::SidResult;

/// A UUID whose canonical string form is base62.
///
/// `Display`, `FromStr` and serde all use the base62 form; use
/// [`Suuid::to_hyphenated`] for the standard 8-4-4-4-12 rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Suuid(Uuid);

impl Suuid {
    /// Generates a random (version 4) SUUID.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Generates a time-ordered (version 7) SUUID.
    #[must_use]
    pub fn now_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Generates a time-based (version 1) SUUID for the given node ID.
    #[must_use]
    pub fn now_v1(node_id: &[u8; 6]) -> Self {
        Self(Uuid::now_v1(node_id))
    }

    /// Generates a reordered time-based (version 6) SUUID for the given node ID.
    #[must_use]
    pub fn now_v6(node_id: &[u8; 6]) -> Self {
        Self(Uuid::now_v6(node_id))
    }

    /// Derives a name-based MD5 (version 3) SUUID.
    #[must_use]
    pub fn new_v3(namespace: &Uuid, name: &[u8]) -> Self {
        Self(Uuid::new_v3(namespace, name))
    }

    /// Derives a name-based SHA-1 (version 5) SUUID.
    #[must_use]
    pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Self {
        Self(Uuid::new_v5(namespace, name))
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a base62 SUUID.
    ///
    /// # Errors
    ///
    /// See [`crate::base62::decode`].
    pub fn parse(s: &str) -> SidResult<Self> {
        decode_u128(s).map(|value| Self(Uuid::from_u128(value)))
    }

    /// Parses a UUID in hyphenated or simple hex form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SidError::MalformedUuid`] if `s` is not 32 hex digits
    /// once hyphens are removed.
    pub fn from_hex(s: &str) -> SidResult<Self> {
        crate::base62::parse_uuid_hex(s).map(|value| Self(Uuid::from_u128(value)))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the UUID version number (0 for the nil UUID).
    #[must_use]
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }

    /// Returns the standard lowercase 8-4-4-4-12 form.
    #[must_use]
    pub fn to_hyphenated(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl fmt::Display for Suuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u128(self.0.as_u128()))
    }
}

impl FromStr for Suuid {
    type Err = crate::SidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Suuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Suuid> for Uuid {
    fn from(suuid: Suuid) -> Self {
        suuid.0
    }
}

impl AsRef<Uuid> for Suuid {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl serde::Serialize for Suuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Suuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
