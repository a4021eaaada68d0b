//! Caller-facing network entities.
//!
//! These are plain values handed to [`TransportNetwork`](crate::TransportNetwork)
//! during loading. They carry no graph semantics: the engine copies what it
//! needs into its own store. All of them compare by id only.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::PassengerEventKind;

/// A physical stop, unique by id
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
}

impl Station {
    pub fn new(id: impl Into<StationIdentifier>, name: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One directed traversal of stops belonging to a line
///
/// A well-formed route has at least two stops, starts at
/// `start_station_id` and ends at `end_station_id`. There may or may not be
/// a matching route in the opposite direction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteIdentifier,
    pub direction: Arc<str>,
    pub line_id: LineIdentifier,
    pub start_station_id: StationIdentifier,
    pub end_station_id: StationIdentifier,
    pub stops: Vec<StationIdentifier>,
}

impl Route {
    /// Build a route whose start and end stations are taken from `stops`
    ///
    /// An empty `stops` yields empty start/end ids, which the engine rejects
    /// when the line is added.
    pub fn new(
        id: impl Into<RouteIdentifier>,
        direction: impl AsRef<str>,
        line_id: impl Into<LineIdentifier>,
        stops: Vec<StationIdentifier>,
    ) -> Self {
        let start_station_id = stops.first().cloned().unwrap_or_else(|| "".into());
        let end_station_id = stops.last().cloned().unwrap_or_else(|| "".into());
        Self {
            id: id.into(),
            direction: direction.as_ref().into(),
            line_id: line_id.into(),
            start_station_id,
            end_station_id,
            stops,
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A named group of routes
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub id: LineIdentifier,
    pub name: Arc<str>,
    pub routes: Vec<Route>,
}

impl Line {
    pub fn new(id: impl Into<LineIdentifier>, name: impl AsRef<str>, routes: Vec<Route>) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            routes,
        }
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A passenger entering or leaving a station
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerEvent {
    pub station_id: StationIdentifier,
    pub kind: PassengerEventKind,
}

impl PassengerEvent {
    pub fn new(station_id: impl Into<StationIdentifier>, kind: PassengerEventKind) -> Self {
        Self {
            station_id: station_id.into(),
            kind,
        }
    }
}

/// Travel time between two directly adjacent stations, in minutes
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTime {
    pub start_station_id: StationIdentifier,
    pub end_station_id: StationIdentifier,
    pub travel_time: u32,
}

/// A complete network description, in loading order
///
/// Stations must be registered before the lines that reference them, and
/// travel times can only be applied once the lines exist.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkLayout {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    pub travel_times: Vec<TravelTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_equality_is_by_id() {
        let a = Station::new("station_000", "Same Name");
        let b = Station::new("station_001", "Same Name");
        let c = Station::new("station_000", "Other Name");

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_route_new_takes_endpoints_from_stops() {
        let route = Route::new(
            "route_000",
            "inbound",
            "line_000",
            vec!["station_000".into(), "station_001".into(), "station_002".into()],
        );

        assert_eq!(route.start_station_id.as_str(), "station_000");
        assert_eq!(route.end_station_id.as_str(), "station_002");
    }

    #[test]
    fn test_line_equality_ignores_routes() {
        let a = Line::new("line_000", "Line Name", vec![]);
        let b = Line::new(
            "line_000",
            "Renamed",
            vec![Route::new("route_000", "inbound", "line_000", vec![])],
        );
        assert_eq!(a, b);
    }
}
