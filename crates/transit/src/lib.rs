//! # network-monitor-transit
//!
//! In-memory model of an underground transport network.
//!
//! ## Features
//!
//! - **Shared stations**: one graph node per station, referenced by every
//!   route and line that stops there
//! - **Per-route edges**: consecutive stops are linked once per route, so
//!   routes stay distinguishable even over the same station pair
//! - **Atomic loading**: a line is validated completely before any of its
//!   routes is stored
//! - **Passenger counts**: signed live counters fed by entry/exit events
//! - **Travel times**: per station pair, and cumulative along a route
//!
//! ## Example
//!
//! ```
//! use network_monitor_transit::prelude::*;
//!
//! let mut network = TransportNetwork::new();
//! for (id, name) in [("s0", "Aldgate"), ("s1", "Bank"), ("s2", "Temple")] {
//!     network.add_station(&Station::new(id, name)).unwrap();
//! }
//!
//! let route = Route::new("r0", "westbound", "l0", vec!["s0".into(), "s1".into(), "s2".into()]);
//! network.add_line(&Line::new("l0", "Circle", vec![route])).unwrap();
//!
//! network.set_travel_time(&"s0".into(), &"s1".into(), 3).unwrap();
//! network.set_travel_time(&"s1".into(), &"s2".into(), 5).unwrap();
//!
//! let total = network
//!     .route_travel_time(&"l0".into(), &"r0".into(), &"s0".into(), &"s2".into())
//!     .unwrap();
//! assert_eq!(total, 8);
//! ```

mod graph;
pub mod identifiers;
pub mod models;
pub mod network;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{entities::*, types::*};
    pub use crate::network::TransportNetwork;
}

pub use prelude::*;
