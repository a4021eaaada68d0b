//! Wire and document types exchanged with the network monitor's data sources.
//!
//! - [`layout`]: the network layout JSON document
//! - [`event`]: live passenger event frames

pub mod event;
pub mod layout;

pub use event::{PassengerEventMessage, decode_frame};
pub use layout::LayoutDocument;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty frame")]
    EmptyFrame,
}

pub type Result<T> = std::result::Result<T, DecodeError>;
