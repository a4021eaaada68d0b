//! Arena storage for the network graph.
//!
//! The store trusts its caller. It performs no business-rule validation:
//! [`TransportNetwork`](crate::TransportNetwork) checks ids and referential
//! integrity before calling any mutator here.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::records::*;
use crate::identifiers::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct GraphStore {
    // Arenas
    nodes: Vec<GraphNode>,
    routes: Vec<RouteRecord>,
    lines: Vec<LineRecord>,

    // Lookup maps
    node_lookup: HashMap<StationIdentifier, NodeIndex>,
    line_lookup: HashMap<LineIdentifier, LineIndex>,
    route_lookup: HashMap<RouteIdentifier, RouteIndex>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Mutators ----

    /// Insert a station node with no passengers and no edges
    pub fn create_node(&mut self, id: StationIdentifier, name: Arc<str>) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        self.node_lookup.insert(id.clone(), index);
        self.nodes.push(GraphNode::new(id, name));
        index
    }

    pub fn create_line(&mut self, id: LineIdentifier, name: Arc<str>) -> LineIndex {
        let index = LineIndex::new(self.lines.len());
        self.line_lookup.insert(id.clone(), index);
        self.lines.push(LineRecord::new(id, name));
        index
    }

    /// Insert a route record and register it under its line
    pub fn create_route(
        &mut self,
        id: RouteIdentifier,
        line: LineIndex,
        head_stop: NodeIndex,
    ) -> RouteIndex {
        let index = RouteIndex::new(self.routes.len());
        self.route_lookup.insert(id.clone(), index);
        self.lines[line.get()].routes.insert(id.clone(), index);
        self.routes.push(RouteRecord {
            id,
            line,
            head_stop,
        });
        index
    }

    /// Append a directed edge; parallel edges for other routes are kept
    pub fn link_edge(&mut self, from: NodeIndex, route: RouteIndex, to: NodeIndex, travel_time: u32) {
        self.nodes[from.get()].edges.push(GraphEdge {
            route,
            next_stop: to,
            travel_time,
        });
    }

    /// Overwrite the travel time of every edge between `a` and `b`, in both
    /// directions and on every route. Returns the number of edges updated.
    pub fn set_pair_travel_time(&mut self, a: NodeIndex, b: NodeIndex, travel_time: u32) -> usize {
        let mut updated = 0;
        for (from, to) in [(a, b), (b, a)] {
            for edge in self.nodes[from.get()]
                .edges
                .iter_mut()
                .filter(|edge| edge.next_stop == to)
            {
                edge.travel_time = travel_time;
                updated += 1;
            }
            if a == b {
                break;
            }
        }
        updated
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut GraphNode {
        &mut self.nodes[index.get()]
    }

    // ---- Lookups ----

    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_lookup.get(id).copied()
    }

    pub fn find_line(&self, id: &str) -> Option<LineIndex> {
        self.line_lookup.get(id).copied()
    }

    /// Find a route registered under a specific line
    pub fn find_route(&self, line_id: &str, route_id: &str) -> Option<RouteIndex> {
        let line = self.find_line(line_id)?;
        self.lines[line.get()].routes.get(route_id).copied()
    }

    /// Find a route on any line
    pub fn find_route_anywhere(&self, route_id: &str) -> Option<RouteIndex> {
        self.route_lookup.get(route_id).copied()
    }

    pub fn node(&self, index: NodeIndex) -> &GraphNode {
        &self.nodes[index.get()]
    }

    pub fn route(&self, index: RouteIndex) -> &RouteRecord {
        &self.routes[index.get()]
    }

    pub fn line(&self, index: LineIndex) -> &LineRecord {
        &self.lines[index.get()]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex::new(i), node))
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineRecord> {
        self.lines.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    // ---- Traversal ----

    /// Travel time stored on any edge between `a` and `b`, either direction
    pub fn pair_travel_time(&self, a: NodeIndex, b: NodeIndex) -> Option<u32> {
        self.node(a)
            .edges_to(b)
            .chain(self.node(b).edges_to(a))
            .map(|edge| edge.travel_time)
            .next()
    }

    /// Walk the edges of a route from its head stop, in travel order
    ///
    /// A route may pass through the same station more than once. The n-th
    /// visit to a node follows the n-th edge of the route leaving it, which
    /// matches the order edges were linked in and bounds the walk by the
    /// route's edge count.
    pub fn route_walk(&self, route: RouteIndex) -> Vec<GraphEdge> {
        let mut current = self.route(route).head_stop;
        let mut hops = Vec::new();
        let mut visits: HashMap<NodeIndex, usize> = HashMap::new();

        loop {
            let visit = visits.entry(current).or_insert(0);
            let Some(edge) = self.node(current).edges_for(route).nth(*visit) else {
                break;
            };
            *visit += 1;
            current = edge.next_stop;
            hops.push(*edge);
        }

        hops
    }

    /// Reconstruct the ordered stops of a route
    pub fn route_stops(&self, route: RouteIndex) -> Vec<NodeIndex> {
        std::iter::once(self.route(route).head_stop)
            .chain(self.route_walk(route).into_iter().map(|edge| edge.next_stop))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_nodes(ids: &[&str]) -> (GraphStore, Vec<NodeIndex>) {
        let mut store = GraphStore::new();
        let nodes = ids
            .iter()
            .map(|id| store.create_node(StationIdentifier::new(id), "Station".into()))
            .collect();
        (store, nodes)
    }

    #[test]
    fn test_empty_store() {
        let store = GraphStore::new();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.line_count(), 0);
        assert!(store.find_node("station_000").is_none());
        assert!(store.find_route("line_000", "route_000").is_none());
    }

    #[test]
    fn test_create_and_find() {
        let (mut store, nodes) = store_with_nodes(&["s0", "s1"]);
        let line = store.create_line("l0".into(), "Line".into());
        let route = store.create_route("r0".into(), line, nodes[0]);

        assert_eq!(store.find_node("s1"), Some(nodes[1]));
        assert_eq!(store.find_line("l0"), Some(line));
        assert_eq!(store.find_route("l0", "r0"), Some(route));
        assert_eq!(store.find_route_anywhere("r0"), Some(route));
        assert_eq!(store.find_route("l1", "r0"), None);
        assert_eq!(store.route(route).line, line);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let (mut store, nodes) = store_with_nodes(&["s0", "s1"]);
        let line = store.create_line("l0".into(), "Line".into());
        let r0 = store.create_route("r0".into(), line, nodes[0]);
        let r1 = store.create_route("r1".into(), line, nodes[0]);

        store.link_edge(nodes[0], r0, nodes[1], 0);
        store.link_edge(nodes[0], r1, nodes[1], 0);

        assert_eq!(store.node(nodes[0]).edges.len(), 2);
        assert_eq!(store.node(nodes[0]).edges_for(r1).count(), 1);
    }

    #[test]
    fn test_set_pair_travel_time_both_directions() {
        let (mut store, nodes) = store_with_nodes(&["s0", "s1"]);
        let line = store.create_line("l0".into(), "Line".into());
        let inbound = store.create_route("in".into(), line, nodes[0]);
        let outbound = store.create_route("out".into(), line, nodes[1]);
        store.link_edge(nodes[0], inbound, nodes[1], 0);
        store.link_edge(nodes[1], outbound, nodes[0], 0);

        assert_eq!(store.pair_travel_time(nodes[0], nodes[1]), Some(0));
        assert_eq!(store.set_pair_travel_time(nodes[1], nodes[0], 4), 2);
        assert_eq!(store.pair_travel_time(nodes[0], nodes[1]), Some(4));
        assert_eq!(store.pair_travel_time(nodes[1], nodes[0]), Some(4));
    }

    #[test]
    fn test_pair_travel_time_not_adjacent() {
        let (store, nodes) = store_with_nodes(&["s0", "s1"]);
        assert_eq!(store.pair_travel_time(nodes[0], nodes[1]), None);
    }

    #[test]
    fn test_route_stops_with_revisit() {
        // s0 -> s1 -> s0 -> s2
        let (mut store, nodes) = store_with_nodes(&["s0", "s1", "s2"]);
        let line = store.create_line("l0".into(), "Line".into());
        let route = store.create_route("r0".into(), line, nodes[0]);
        store.link_edge(nodes[0], route, nodes[1], 0);
        store.link_edge(nodes[1], route, nodes[0], 0);
        store.link_edge(nodes[0], route, nodes[2], 0);

        assert_eq!(
            store.route_stops(route),
            vec![nodes[0], nodes[1], nodes[0], nodes[2]]
        );
    }

    #[test]
    fn test_route_stops_ignores_other_routes() {
        let (mut store, nodes) = store_with_nodes(&["s0", "s1", "s2"]);
        let line = store.create_line("l0".into(), "Line".into());
        let r0 = store.create_route("r0".into(), line, nodes[0]);
        let r1 = store.create_route("r1".into(), line, nodes[0]);
        store.link_edge(nodes[0], r1, nodes[2], 0);
        store.link_edge(nodes[0], r0, nodes[1], 0);

        assert_eq!(store.route_stops(r0), vec![nodes[0], nodes[1]]);
        assert_eq!(store.route_stops(r1), vec![nodes[0], nodes[2]]);
    }
}
