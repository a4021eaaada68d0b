//! Type-safe identifiers for network entities.
//!
//! Identifiers wrap an `Arc<str>` so that the same id can be held by the
//! caller's entities, the graph store's lookup maps and query results
//! without copying the string each time.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        // Hash of `Arc<str>` matches `str`, so maps keyed by identifiers
        // can be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::new(s))
            }
        }
    };
}

impl_identifier!(StationIdentifier);
impl_identifier!(RouteIdentifier);
impl_identifier!(LineIdentifier);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = StationIdentifier::new("station_000");
        let id2 = StationIdentifier::new("station_000");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_identifier_lookup_by_str() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(LineIdentifier::new("line_000"), 7);

        assert_eq!(map.get("line_000"), Some(&7));
        assert_eq!(map.get(&LineIdentifier::new("line_000")), Some(&7));
        assert_eq!(map.get("line_001"), None);
    }

    #[test]
    fn test_identifier_display() {
        let id = RouteIdentifier::new("route_000");
        assert_eq!(format!("{}", id), "route_000");
    }

    #[test]
    fn test_identifier_conversions() {
        let _id1: RouteIdentifier = "route_001".into();
        let _id2: LineIdentifier = String::from("line_002").into();
    }

    #[test]
    fn test_identifier_ordering() {
        let mut ids = vec![
            StationIdentifier::new("station_002"),
            StationIdentifier::new("station_000"),
            StationIdentifier::new("station_001"),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "station_000");
        assert_eq!(ids[2].as_str(), "station_002");
    }
}
