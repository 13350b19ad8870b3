//! Macros for defining typed short IDs.

/// Macro to define a typed short ID with a fixed prefix.
///
/// This generates a newtype wrapper around [`ShortId`](crate::ShortId) with:
/// - A `PREFIX` constant
/// - `new()` to generate a fresh ID at the current time
/// - `parse()` to parse from string, checking the prefix
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `Ord` by timestamp, then random segment
///
/// The prefix must not contain `:`; this is checked at compile time.
///
/// # Example
///
/// ```ignore
/// define_short_id!(UserId, "usr");
///
/// let id = UserId::new();
/// let parsed: UserId = "usr:AAABjS2xQ9kT3vF8aZq".parse()?;
/// ```
#[macro_export]
macro_rules! define_short_id {
    ($name:ident, $prefix:literal) => {
        const _: () = assert!(
            $crate::short_id::is_valid_prefix($prefix),
            "short ID prefix must not contain ':'"
        );

        /// A typed short ID for this resource type.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($crate::ShortId);

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new ID at the current time.
            #[must_use]
            pub fn new() -> Self {
                Self::at(
                    $crate::temporal::now_millis(),
                    $crate::short_id::DEFAULT_RANDOM_LENGTH,
                )
            }

            /// Creates a new ID with a fixed timestamp and random length.
            #[must_use]
            pub fn at(timestamp_ms: u64, length: usize) -> Self {
                let id = $crate::ShortId::generate(Some(Self::PREFIX), timestamp_ms, length)
                    .expect("prefix checked at compile time");
                Self(id)
            }

            /// Returns the underlying short ID.
            #[must_use]
            pub fn short_id(&self) -> &$crate::ShortId {
                &self.0
            }

            /// Returns the timestamp portion in milliseconds.
            #[must_use]
            pub fn timestamp_ms(&self) -> u64 {
                self.0.timestamp_ms()
            }

            /// Parses an ID from a string.
            ///
            /// The string must be in the format `{prefix}:{temporal}{random}`.
            pub fn parse(s: &str) -> Result<Self, $crate::SidError> {
                if s.is_empty() {
                    return Err($crate::SidError::Empty);
                }

                let Some((prefix, _)) = s.split_once($crate::short_id::SEPARATOR) else {
                    return Err($crate::SidError::MissingSeparator);
                };

                if prefix != Self::PREFIX {
                    return Err($crate::SidError::MissingPrefix {
                        expected: Self::PREFIX,
                        actual: prefix.to_string(),
                    });
                }

                $crate::ShortId::parse(s).map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0
                    .timestamp_ms()
                    .cmp(&other.0.timestamp_ms())
                    .then_with(|| self.0.random().cmp(other.0.random()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::SidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let s = <String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::parse(&s).map_err($crate::__private::serde::de::Error::custom)
            }
        }

        impl AsRef<$crate::ShortId> for $name {
            fn as_ref(&self) -> &$crate::ShortId {
                &self.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::SidError;

    define_short_id!(UserId, "usr");
    define_short_id!(OrgId, "org");

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_prefix() {
        let id = UserId::new();
        assert!(id.to_string().starts_with("usr:"));
    }

    #[test]
    fn test_user_id_wrong_prefix() {
        let org = OrgId::new().to_string();
        let result: Result<UserId, _> = org.parse();
        assert!(matches!(
            result.unwrap_err(),
            SidError::MissingPrefix { expected: "usr", .. }
        ));
    }

    #[test]
    fn test_user_id_missing_separator() {
        let result: Result<UserId, _> = "usrAAAAAAAAAAAabcdefgh".parse();
        assert_eq!(result.unwrap_err(), SidError::MissingSeparator);
    }

    #[test]
    fn test_user_id_empty() {
        let result: Result<UserId, _> = "".parse();
        assert!(result.unwrap_err().is_empty());
    }

    #[test]
    fn test_user_id_sorts_by_timestamp() {
        let early = UserId::at(1000, 8);
        let late = UserId::at(2000, 8);
        assert!(early < late);
        assert_eq!(early.timestamp_ms(), 1000);
    }

    #[test]
    fn test_user_id_json_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
