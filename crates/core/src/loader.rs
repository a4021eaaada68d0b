//! Loading the network layout document.

use std::path::Path;

use api_types::LayoutDocument;
use network_monitor_transit::NetworkLayout;
use tracing::info;

use crate::error::Result;
use crate::fetch::DataFetcher;

/// Read and parse a layout document from disk
pub async fn load_layout_file(path: &Path) -> Result<NetworkLayout> {
    let bytes = tokio::fs::read(path).await?;
    let layout = parse_layout(&bytes)?;
    info!(
        path = %path.display(),
        stations = layout.stations.len(),
        lines = layout.lines.len(),
        "read layout file"
    );
    Ok(layout)
}

/// Fetch and parse a layout document
pub async fn fetch_layout(fetcher: &dyn DataFetcher, url: &str) -> Result<NetworkLayout> {
    let bytes = fetcher.fetch(url).await?;
    let layout = parse_layout(&bytes)?;
    info!(
        url,
        stations = layout.stations.len(),
        lines = layout.lines.len(),
        "fetched layout"
    );
    Ok(layout)
}

fn parse_layout(bytes: &[u8]) -> Result<NetworkLayout> {
    Ok(LayoutDocument::from_slice(bytes)?.into())
}
