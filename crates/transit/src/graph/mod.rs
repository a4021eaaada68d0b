//! Internal graph representation of the network.

pub(crate) mod records;
pub(crate) mod store;

pub(crate) use records::{NodeIndex, RouteIndex};
pub(crate) use store::GraphStore;
