//! Network entities, enums and errors.

pub mod entities;
pub mod types;

// Re-exports for convenience
pub use entities::{Line, NetworkLayout, PassengerEvent, Route, Station, TravelTime};
pub use types::{NetworkError, PassengerEventKind, Result};
