//! The transport network: registration, passenger counts and travel times.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::graph::{GraphStore, NodeIndex, RouteIndex};
use crate::identifiers::*;
use crate::models::*;
use crate::network::validation::resolve_line;

/// In-memory model of an underground network
///
/// Stations are registered first, then lines (with their routes), then the
/// travel times between adjacent stations. Every station is stored once and
/// shared by all the routes that stop there.
///
/// The network is a plain data structure. Callers that share it between
/// threads must wrap it in a lock of their own.
#[derive(Clone, Debug, Default)]
pub struct TransportNetwork {
    store: GraphStore,
}

impl TransportNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self {
            store: GraphStore::new(),
        }
    }

    /// Build a network from a complete layout
    ///
    /// Stops at the first station, line or travel time that is rejected.
    pub fn from_layout(layout: &NetworkLayout) -> Result<Self> {
        let mut network = Self::new();

        for station in &layout.stations {
            network.add_station(station)?;
        }
        for line in &layout.lines {
            network.add_line(line)?;
        }
        for travel_time in &layout.travel_times {
            network.set_travel_time(
                &travel_time.start_station_id,
                &travel_time.end_station_id,
                travel_time.travel_time,
            )?;
        }

        info!(
            stations = network.station_count(),
            lines = network.line_count(),
            routes = network.route_count(),
            travel_times = layout.travel_times.len(),
            "loaded network layout"
        );
        Ok(network)
    }

    // ---- Registration ----

    /// Add a station to the network
    ///
    /// Fails if a station with the same id is already registered, whatever
    /// its name. Names are not unique.
    pub fn add_station(&mut self, station: &Station) -> Result<()> {
        if self.store.find_node(station.id.as_str()).is_some() {
            return Err(NetworkError::DuplicateStation(station.id.clone()));
        }

        self.store.create_node(station.id.clone(), station.name.clone());
        debug!(station = %station.id, "added station");
        Ok(())
    }

    /// Add a line and all of its routes
    ///
    /// Every stop of every route must already be registered as a station.
    /// The line is validated as a whole before anything is stored: on error
    /// the network is left exactly as it was.
    pub fn add_line(&mut self, line: &Line) -> Result<()> {
        let resolved = resolve_line(&self.store, line)?;

        let line_index = self.store.create_line(line.id.clone(), line.name.clone());
        for (route, stops) in line.routes.iter().zip(resolved) {
            let route_index = self.store.create_route(route.id.clone(), line_index, stops[0]);
            for pair in stops.windows(2) {
                // Travel time belongs to the station pair, not to the route.
                let travel_time = self.store.pair_travel_time(pair[0], pair[1]).unwrap_or(0);
                self.store.link_edge(pair[0], route_index, pair[1], travel_time);
            }
        }

        debug!(line = %line.id, routes = line.routes.len(), "added line");
        Ok(())
    }

    // ---- Passengers ----

    /// Record a passenger entering or leaving a station
    ///
    /// Returns the updated count for the station.
    pub fn record_passenger_event(&mut self, event: &PassengerEvent) -> Result<i64> {
        let node = self.node(&event.station_id)?;
        let node = self.store.node_mut(node);
        node.passenger_count += event.kind.delta();
        Ok(node.passenger_count)
    }

    /// Number of passengers currently recorded at a station
    ///
    /// The count can be negative: recording may start in the middle of the
    /// day, before the entries of passengers who later leave.
    pub fn passenger_count(&self, station: &StationIdentifier) -> Result<i64> {
        let node = self.node(station)?;
        Ok(self.store.node(node).passenger_count)
    }

    // ---- Queries ----

    /// Routes that stop at a station, across all lines, in registration order
    ///
    /// An unknown station and a station no route serves both give an empty
    /// list. Use [`contains_station`](Self::contains_station) to tell them apart.
    pub fn routes_serving_station(&self, station: &StationIdentifier) -> Vec<RouteIdentifier> {
        let Some(target) = self.store.find_node(station.as_str()) else {
            debug!(station = %station, "routes requested for unknown station");
            return Vec::new();
        };

        // Outgoing edges cover every stop but the last one of each route, so
        // edges arriving at the station are scanned too.
        let mut routes = BTreeSet::new();
        routes.extend(self.store.node(target).edges.iter().map(|edge| edge.route));
        for (_, node) in self.store.nodes() {
            routes.extend(node.edges_to(target).map(|edge| edge.route));
        }

        routes
            .into_iter()
            .map(|route| self.store.route(route).id.clone())
            .collect()
    }

    /// Set the travel time between two adjacent stations
    ///
    /// The time applies to every route connecting the two stations directly,
    /// in both directions.
    pub fn set_travel_time(
        &mut self,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
        travel_time: u32,
    ) -> Result<()> {
        let (a, b) = self.pair(station_a, station_b)?;

        let updated = self.store.set_pair_travel_time(a, b, travel_time);
        if updated == 0 {
            return Err(NetworkError::StationsNotAdjacent(
                station_a.clone(),
                station_b.clone(),
            ));
        }

        debug!(from = %station_a, to = %station_b, travel_time, edges = updated, "set travel time");
        Ok(())
    }

    /// Travel time between two adjacent stations
    ///
    /// Adjacent stations whose time was never set report 0.
    pub fn travel_time(
        &self,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
    ) -> Result<u32> {
        let (a, b) = self.pair(station_a, station_b)?;
        self.store
            .pair_travel_time(a, b)
            .ok_or_else(|| NetworkError::StationsNotAdjacent(station_a.clone(), station_b.clone()))
    }

    /// Total travel time between two stations along one route
    ///
    /// Sums the travel time of every hop from `station_a` to `station_b` in
    /// the route's direction of travel. Routes are directed: if `station_b`
    /// comes first the query fails with [`NetworkError::WrongDirection`].
    pub fn route_travel_time(
        &self,
        line: &LineIdentifier,
        route: &RouteIdentifier,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
    ) -> Result<u32> {
        let route_index = self.route(line, route)?;
        let (a, b) = self.pair(station_a, station_b)?;

        let not_on_route = |station: &StationIdentifier| NetworkError::StationNotOnRoute {
            route: route.clone(),
            station: station.clone(),
        };

        let head = self.store.route(route_index).head_stop;
        let mut started = head == a;
        let mut passed_b = head == b;
        let mut total: u32 = 0;

        for edge in self.store.route_walk(route_index) {
            if started {
                total = total.saturating_add(edge.travel_time);
                if edge.next_stop == b {
                    return Ok(total);
                }
            } else if edge.next_stop == a {
                started = true;
            } else if edge.next_stop == b {
                passed_b = true;
            }
        }

        if !started {
            Err(not_on_route(station_a))
        } else if passed_b {
            Err(NetworkError::WrongDirection {
                route: route.clone(),
                from: station_a.clone(),
                to: station_b.clone(),
            })
        } else {
            Err(not_on_route(station_b))
        }
    }

    /// Stops of a route, in its direction of travel
    pub fn route_stops(
        &self,
        line: &LineIdentifier,
        route: &RouteIdentifier,
    ) -> Result<Vec<StationIdentifier>> {
        let route_index = self.route(line, route)?;
        Ok(self
            .store
            .route_stops(route_index)
            .into_iter()
            .map(|node| self.store.node(node).id.clone())
            .collect())
    }

    // ---- Lookups ----

    pub fn contains_station(&self, station: &StationIdentifier) -> bool {
        self.store.find_node(station.as_str()).is_some()
    }

    pub fn station(&self, station: &StationIdentifier) -> Option<Station> {
        let node = self.store.node(self.store.find_node(station.as_str())?);
        Some(Station {
            id: node.id.clone(),
            name: node.name.clone(),
        })
    }

    /// All stations, in registration order
    pub fn stations(&self) -> Vec<Station> {
        self.store
            .nodes()
            .map(|(_, node)| Station {
                id: node.id.clone(),
                name: node.name.clone(),
            })
            .collect()
    }

    /// Name of a registered line
    pub fn line_name(&self, line: &LineIdentifier) -> Option<&str> {
        let index = self.store.find_line(line.as_str())?;
        Some(&*self.store.line(index).name)
    }

    /// Line that a route was registered under
    pub fn line_of_route(&self, route: &RouteIdentifier) -> Option<LineIdentifier> {
        let index = self.store.find_route_anywhere(route.as_str())?;
        let line = self.store.route(index).line;
        Some(self.store.line(line).id.clone())
    }

    /// All lines, in registration order
    pub fn lines(&self) -> Vec<LineIdentifier> {
        self.store.lines().map(|line| line.id.clone()).collect()
    }

    pub fn station_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    pub fn route_count(&self) -> usize {
        self.store.route_count()
    }

    // ---- Helpers ----

    fn node(&self, station: &StationIdentifier) -> Result<NodeIndex> {
        self.store
            .find_node(station.as_str())
            .ok_or_else(|| NetworkError::StationNotFound(station.clone()))
    }

    /// Resolve two distinct stations
    fn pair(
        &self,
        station_a: &StationIdentifier,
        station_b: &StationIdentifier,
    ) -> Result<(NodeIndex, NodeIndex)> {
        let a = self.node(station_a)?;
        let b = self.node(station_b)?;
        if a == b {
            return Err(NetworkError::SameStation(station_a.clone()));
        }
        Ok((a, b))
    }

    fn route(
        &self,
        line: &LineIdentifier,
        route: &RouteIdentifier,
    ) -> Result<RouteIndex> {
        if self.store.find_line(line.as_str()).is_none() {
            return Err(NetworkError::LineNotFound(line.clone()));
        }
        self.store
            .find_route(line.as_str(), route.as_str())
            .ok_or_else(|| NetworkError::RouteNotFound {
                line: line.clone(),
                route: route.clone(),
            })
    }
}
