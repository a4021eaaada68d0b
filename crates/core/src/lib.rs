//! # network-monitor-core
//!
//! Everything around the network model: fetching and loading the layout,
//! sharing one network between tasks, and feeding it live passenger events.

pub mod error;
pub mod fetch;
pub mod ingest;
pub mod loader;
pub mod shared;

pub use error::{Error, Result};
pub use fetch::{DataFetcher, DownloadOptions, HttpsFetcher};
pub use ingest::{IngestStats, ingest_frames, read_event_log};
pub use loader::{fetch_layout, load_layout_file};
pub use shared::SharedNetwork;

// Re-export the model crates
pub use api_types;
pub use network_monitor_transit as transit;
