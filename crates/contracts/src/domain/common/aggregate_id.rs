use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for entity identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for URLs and DOM keys
    fn as_string(&self) -> String;

    /// Parse an id back from a form value
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Declares a transparent integer id newtype.
///
/// The backend uses serial integer keys for every table.
#[macro_export]
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map($name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::integer_id!(
        /// Id used only by these tests
        SampleId
    );

    #[test]
    fn test_integer_id_round_trips_through_strings() {
        let id = SampleId::from_string(" 42 ").unwrap();
        assert_eq!(id, SampleId(42));
        assert_eq!(id.as_string(), "42");
        assert!(SampleId::from_string("abc").is_err());
    }

    #[test]
    fn test_integer_id_is_transparent_on_the_wire() {
        assert_eq!(serde_json::to_string(&SampleId(5)).unwrap(), "5");
        let id: SampleId = serde_json::from_str("7").unwrap();
        assert_eq!(id.value(), 7);
    }
}
