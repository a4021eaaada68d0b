//! Arena records for the network graph.
//!
//! Records never own each other. Every cross reference (edge to route, edge
//! to next stop, route to line, route to head stop) is a typed index into
//! the arenas held by [`GraphStore`](super::store::GraphStore).

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::*;

// ============================================================================
// Indices
// ============================================================================

macro_rules! impl_index {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub(crate) struct $name(u32);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                Self(index as u32)
            }

            pub(crate) fn get(self) -> usize {
                self.0 as usize
            }
        }
    };
}

impl_index!(NodeIndex);
impl_index!(RouteIndex);
impl_index!(LineIndex);

// ============================================================================
// Graph Node
// ============================================================================

/// One station, shared by every route that stops there
#[derive(Clone, Debug)]
pub(crate) struct GraphNode {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub passenger_count: i64,
    pub edges: Vec<GraphEdge>,
}

impl GraphNode {
    pub fn new(id: StationIdentifier, name: Arc<str>) -> Self {
        Self {
            id,
            name,
            passenger_count: 0,
            edges: Vec::new(),
        }
    }

    /// Edges leaving this node that belong to `route`, in insertion order
    pub fn edges_for(&self, route: RouteIndex) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |edge| edge.route == route)
    }

    /// Edges leaving this node towards `to`, on any route
    pub fn edges_to(&self, to: NodeIndex) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |edge| edge.next_stop == to)
    }
}

// ============================================================================
// Graph Edge
// ============================================================================

/// A directed hop between two consecutive stops of one route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GraphEdge {
    pub route: RouteIndex,
    pub next_stop: NodeIndex,
    pub travel_time: u32,
}

// ============================================================================
// Route / Line Records
// ============================================================================

#[derive(Clone, Debug)]
pub(crate) struct RouteRecord {
    pub id: RouteIdentifier,
    pub line: LineIndex,
    pub head_stop: NodeIndex,
}

#[derive(Clone, Debug)]
pub(crate) struct LineRecord {
    pub id: LineIdentifier,
    pub name: Arc<str>,
    pub routes: HashMap<RouteIdentifier, RouteIndex>,
}

impl LineRecord {
    pub fn new(id: LineIdentifier, name: Arc<str>) -> Self {
        Self {
            id,
            name,
            routes: HashMap::new(),
        }
    }
}
