//! Network engine built on the graph store.

pub mod engine;
mod validation;

pub use engine::TransportNetwork;
