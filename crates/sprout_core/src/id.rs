//! Type-safe ID generation and management
//!
//! This module provides a generic, type-safe ID system with consistent prefixes
//! and UUID-based uniqueness guarantees.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe ID with a consistent prefix and UUID
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    /// The unique identifier
    uuid: Uuid,
    /// Phantom data to make each ID type unique
    _phantom: PhantomData<T>,
}

impl<T: IdType> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", T::PREFIX, self.uuid)
    }
}

/// Trait for types that can be used as ID markers
pub trait IdType: Clone + Copy + PartialEq + Eq + std::hash::Hash + Ord + Send + Sync + 'static {
    /// The prefix for this ID type (e.g., "habit" for habits, "goal" for goals)
    const PREFIX: &'static str;
}

/// Errors that can occur when working with IDs
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum IdError {
    #[error("Invalid ID format: expected prefix '{expected}', got '{actual}'")]
    #[diagnostic(help("Ensure the ID starts with the correct prefix followed by an underscore"))]
    InvalidPrefix { expected: String, actual: String },

    #[error("Invalid UUID: {0}")]
    #[diagnostic(help("The UUID portion of the ID must be a valid UUID v4 format"))]
    InvalidUuid(#[from] uuid::Error),

    #[error("Invalid ID format: {0}")]
    #[diagnostic(help(
        "IDs must be in the format 'prefix_uuid' where prefix matches the expected type"
    ))]
    InvalidFormat(String),
}

impl<T: IdType> Id<T> {
    /// Create a new ID with a generated UUID
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _phantom: PhantomData,
        }
    }

    /// The UUID portion of this ID
    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}

impl<T: IdType> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", T::PREFIX, self.uuid)
    }
}

impl<T: IdType> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, uuid) = s
            .split_once('_')
            .ok_or_else(|| IdError::InvalidFormat(s.to_string()))?;
        if prefix != T::PREFIX {
            return Err(IdError::InvalidPrefix {
                expected: T::PREFIX.to_string(),
                actual: prefix.to_string(),
            });
        }
        Ok(Self::from_uuid(Uuid::from_str(uuid)?))
    }
}

impl<T: IdType> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, T: IdType> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor<T>(PhantomData<T>);

        impl<T: IdType> Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a string in the format '{}_<uuid>'", T::PREFIX)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor(PhantomData))
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $marker:ident, $alias:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $marker;

        impl IdType for $marker {
            const PREFIX: &'static str = $prefix;
        }

        pub type $alias = Id<$marker>;
    };
}

define_id!(
    /// Marker for habit IDs
    HabitIdType, HabitId, "habit"
);
define_id!(
    /// Marker for goal IDs
    GoalIdType, GoalId, "goal"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_roundtrip() {
        let id = HabitId::generate();
        let shown = id.to_string();
        assert!(shown.starts_with("habit_"));

        let parsed: HabitId = shown.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_rejects_wrong_prefix() {
        let goal = GoalId::generate().to_string();
        let err = goal.parse::<HabitId>().unwrap_err();
        assert!(matches!(err, IdError::InvalidPrefix { .. }));
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(matches!(
            "not-an-id".parse::<HabitId>(),
            Err(IdError::InvalidFormat(_))
        ));
        assert!(matches!(
            "habit_zzzz".parse::<HabitId>(),
            Err(IdError::InvalidUuid(_))
        ));
    }

    #[test]
    fn test_id_serde_as_string() {
        let id = HabitId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: HabitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
