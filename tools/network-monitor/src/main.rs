use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use futures_util::stream;
use network_monitor_core::fetch::download_file;
use network_monitor_core::transit::{NetworkLayout, TransportNetwork};
use network_monitor_core::{
    fetch_layout, ingest_frames, load_layout_file, read_event_log, DownloadOptions, HttpsFetcher,
    SharedNetwork,
};
use tracing_subscriber::EnvFilter;

mod report;

use report::{print_report, RouteQuery};

#[derive(Parser, Debug)]
#[command(
    name = "network-monitor",
    author,
    version,
    about = "Load an underground network layout, replay passenger events and report on it",
    long_about = "Builds the network model from a layout JSON document (local file or HTTPS \
                  URL), optionally replays a recorded passenger event feed (one JSON frame per \
                  line), then prints passenger counts, serving routes and travel times for the \
                  requested stations and routes."
)]
struct Args {
    /// Network layout JSON file
    #[arg(
        short,
        long,
        env = "NETWORK_MONITOR_LAYOUT",
        conflicts_with = "layout_url",
        required_unless_present = "layout_url"
    )]
    layout: Option<PathBuf>,

    /// Fetch the network layout from this HTTPS URL instead
    #[arg(long, env = "NETWORK_MONITOR_LAYOUT_URL")]
    layout_url: Option<String>,

    /// PEM bundle of the certificates trusted for --layout-url
    #[arg(long, env = "NETWORK_MONITOR_CA_FILE")]
    ca_file: Option<PathBuf>,

    /// Keep a copy of the fetched layout at this path
    #[arg(long, requires = "layout_url")]
    download_to: Option<PathBuf>,

    /// HTTP timeout in seconds for --layout-url
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Recorded passenger event feed to replay
    #[arg(short, long, env = "NETWORK_MONITOR_EVENTS")]
    events: Option<PathBuf>,

    /// Station to report on (repeatable)
    #[arg(short, long = "station")]
    stations: Vec<String>,

    /// Route to report on, as LINE/ROUTE (repeatable)
    #[arg(short, long = "route")]
    routes: Vec<RouteQuery>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .without_time()
        .init();

    let layout = read_layout(&args).await?;
    let network = TransportNetwork::from_layout(&layout).context("Failed to build network")?;
    let shared = SharedNetwork::new(network);

    if let Some(events) = &args.events {
        tracing::info!("Replaying events: {}", events.display());
        let frames = read_event_log(events)
            .await
            .with_context(|| format!("Failed to read event log {}", events.display()))?;
        let stats = ingest_frames(&shared, stream::iter(frames)).await;
        if stats.recorded == 0 && stats.frames > 0 {
            tracing::warn!("No event in {} could be recorded", events.display());
        }
    }

    let network = shared.read().await;
    print_report(&network, &args.stations, &args.routes);
    Ok(())
}

async fn read_layout(args: &Args) -> Result<NetworkLayout> {
    if let Some(path) = &args.layout {
        tracing::info!("Layout: {}", path.display());
        return load_layout_file(path)
            .await
            .with_context(|| format!("Failed to load layout {}", path.display()));
    }

    let Some(url) = &args.layout_url else {
        bail!("Either --layout or --layout-url is required");
    };
    tracing::info!("Layout URL: {url}");

    let options = DownloadOptions {
        ca_file: args.ca_file.clone(),
        timeout: Some(Duration::from_secs(args.timeout_secs)),
    };
    let fetcher = HttpsFetcher::new(&options).context("Failed to set up HTTPS client")?;

    match &args.download_to {
        Some(destination) => {
            download_file(&fetcher, url, destination)
                .await
                .with_context(|| format!("Failed to download {url}"))?;
            load_layout_file(destination)
                .await
                .with_context(|| format!("Failed to load layout {}", destination.display()))
        }
        None => fetch_layout(&fetcher, url)
            .await
            .with_context(|| format!("Failed to fetch layout {url}")),
    }
}
