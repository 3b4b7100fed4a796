//! Strongly-typed aggregate identifiers.

/// Common surface of every aggregate identifier.
pub trait Identifier:
    Copy + Eq + std::hash::Hash + std::fmt::Display + std::fmt::Debug + Send + Sync
{
    fn unique() -> Self;

    fn value(&self) -> uuid::Uuid;
}

/// Declares a UUID-backed identifier newtype.
///
/// Generates construction from a fresh v4 UUID, lossless conversion to and
/// from [`uuid::Uuid`], `FromStr` parsing and a hyphenated `Display`.
#[macro_export]
macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            pub fn unique() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn from_uuid(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl $crate::shared::domain::Identifier for $name {
            fn unique() -> Self {
                $name::unique()
            }

            fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
