//! Network layout document.
//!
//! ```json
//! {
//!   "stations": [{"station_id": "station_0", "name": "Aldgate"}],
//!   "lines": [{"line_id": "circle", "name": "Circle", "routes": [...]}],
//!   "travel_times": [{"start_station_id": "station_0", "end_station_id": "station_1", "travel_time": 2}]
//! }
//! ```

use network_monitor_transit::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub stations: Vec<StationRecord>,
    pub lines: Vec<LineRecord>,
    #[serde(default)]
    pub travel_times: Vec<TravelTimeRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_id: StationIdentifier,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineRecord {
    pub line_id: LineIdentifier,
    pub name: String,
    pub routes: Vec<RouteRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: RouteIdentifier,
    pub direction: String,
    pub line_id: LineIdentifier,
    pub start_station_id: StationIdentifier,
    pub end_station_id: StationIdentifier,
    pub route_stops: Vec<StationIdentifier>,
    /// Display name, not used by the network model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TravelTimeRecord {
    pub start_station_id: StationIdentifier,
    pub end_station_id: StationIdentifier,
    pub travel_time: u32,
}

impl LayoutDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Station {
            id: record.station_id,
            name: record.name.into(),
        }
    }
}

impl From<RouteRecord> for Route {
    fn from(record: RouteRecord) -> Self {
        Route {
            id: record.route_id,
            direction: record.direction.into(),
            line_id: record.line_id,
            start_station_id: record.start_station_id,
            end_station_id: record.end_station_id,
            stops: record.route_stops,
        }
    }
}

impl From<LineRecord> for Line {
    fn from(record: LineRecord) -> Self {
        Line {
            id: record.line_id,
            name: record.name.into(),
            routes: record.routes.into_iter().map(Route::from).collect(),
        }
    }
}

impl From<TravelTimeRecord> for TravelTime {
    fn from(record: TravelTimeRecord) -> Self {
        TravelTime {
            start_station_id: record.start_station_id,
            end_station_id: record.end_station_id,
            travel_time: record.travel_time,
        }
    }
}

impl From<LayoutDocument> for NetworkLayout {
    fn from(document: LayoutDocument) -> Self {
        NetworkLayout {
            stations: document.stations.into_iter().map(Station::from).collect(),
            lines: document.lines.into_iter().map(Line::from).collect(),
            travel_times: document.travel_times.into_iter().map(TravelTime::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "lines": [
            {
                "line_id": "line_000",
                "name": "Line Name",
                "routes": [
                    {
                        "direction": "inbound",
                        "end_station_id": "station_002",
                        "line_id": "line_000",
                        "name": "Route Name",
                        "route_id": "route_000",
                        "route_stops": ["station_000", "station_001", "station_002"],
                        "start_station_id": "station_000"
                    }
                ]
            }
        ],
        "stations": [
            {"name": "Station 0", "station_id": "station_000"},
            {"name": "Station 1", "station_id": "station_001"},
            {"name": "Station 2", "station_id": "station_002"}
        ],
        "travel_times": [
            {"start_station_id": "station_000", "end_station_id": "station_001", "travel_time": 1},
            {"start_station_id": "station_001", "end_station_id": "station_002", "travel_time": 2}
        ]
    }"#;

    #[test]
    fn test_parse_layout() {
        let document = LayoutDocument::from_json(LAYOUT).unwrap();
        assert_eq!(document.stations.len(), 3);
        assert_eq!(document.lines[0].routes[0].route_stops.len(), 3);
        assert_eq!(document.lines[0].routes[0].name.as_deref(), Some("Route Name"));
        assert_eq!(document.travel_times[1].travel_time, 2);
    }

    #[test]
    fn test_layout_into_network() {
        let layout: NetworkLayout = LayoutDocument::from_json(LAYOUT).unwrap().into();
        let network = TransportNetwork::from_layout(&layout).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(
            network.route_travel_time(
                &"line_000".into(),
                &"route_000".into(),
                &"station_000".into(),
                &"station_002".into(),
            ),
            Ok(3)
        );
    }

    #[test]
    fn test_travel_times_optional() {
        let document = LayoutDocument::from_json(r#"{"stations": [], "lines": []}"#).unwrap();
        assert!(document.travel_times.is_empty());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result = LayoutDocument::from_json(r#"{"stations": [{"name": "No Id"}], "lines": []}"#);
        assert!(matches!(result, Err(crate::DecodeError::Json(_))));
    }
}
