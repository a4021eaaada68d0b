//! Core enums and errors for the transport network.

use std::fmt;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Whether a passenger entered or left a station
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PassengerEventKind {
    In,
    Out,
}

impl PassengerEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Contribution of one event of this kind to a station's counter
    pub fn delta(&self) -> i64 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

impl fmt::Display for PassengerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Line not found: {0}")]
    LineNotFound(LineIdentifier),

    #[error("Route not found: {route} on line {line}")]
    RouteNotFound {
        line: LineIdentifier,
        route: RouteIdentifier,
    },

    #[error("Station {station} is not served by route {route}")]
    StationNotOnRoute {
        route: RouteIdentifier,
        station: StationIdentifier,
    },

    #[error("Station already in the network: {0}")]
    DuplicateStation(StationIdentifier),

    #[error("Line already in the network: {0}")]
    DuplicateLine(LineIdentifier),

    #[error("Route already in the network: {0}")]
    DuplicateRoute(RouteIdentifier),

    #[error("Line {0} has no routes")]
    EmptyLine(LineIdentifier),

    #[error("Invalid route {route}: {reason}")]
    InvalidRoute {
        route: RouteIdentifier,
        reason: String,
    },

    #[error("Stations {0} and {1} are not adjacent on any route")]
    StationsNotAdjacent(StationIdentifier, StationIdentifier),

    #[error("Source and target are the same station: {0}")]
    SameStation(StationIdentifier),

    #[error("Station {to} comes before {from} on route {route}")]
    WrongDirection {
        route: RouteIdentifier,
        from: StationIdentifier,
        to: StationIdentifier,
    },
}

pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_delta() {
        assert_eq!(PassengerEventKind::In.delta(), 1);
        assert_eq!(PassengerEventKind::Out.delta(), -1);
        assert_eq!(PassengerEventKind::Out.to_string(), "out");
    }

    #[test]
    fn test_error_display() {
        let err = NetworkError::StationsNotAdjacent("a".into(), "b".into());
        assert_eq!(err.to_string(), "Stations a and b are not adjacent on any route");
    }
}
