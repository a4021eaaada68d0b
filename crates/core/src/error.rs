//! Error types for loading and feeding the network.

use std::path::PathBuf;

use api_types::DecodeError;
use network_monitor_transit::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read CA bundle {}: {source}", .path.display())]
    CaBundle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

pub type Result<T> = std::result::Result<T, Error>;
