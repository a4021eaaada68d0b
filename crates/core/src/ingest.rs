//! Feeding live passenger events into a shared network.
//!
//! The transport that delivers frames (a TLS WebSocket in production) is
//! left to the caller: anything that yields text frames as a [`Stream`]
//! can drive [`ingest_frames`].

use std::path::Path;

use api_types::decode_frame;
use futures_util::{Stream, StreamExt};
use network_monitor_transit::PassengerEvent;
use tracing::{info, trace, warn};

use crate::error::Result;
use crate::shared::SharedNetwork;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Frames received
    pub frames: usize,
    /// Events applied to the network
    pub recorded: usize,
    /// Well-formed events the network refused (unknown station)
    pub rejected: usize,
    /// Frames that could not be decoded
    pub malformed: usize,
}

/// Record every event carried by `frames` until the stream ends
///
/// Bad input never stops the feed: malformed frames and events for unknown
/// stations are logged, counted and skipped.
pub async fn ingest_frames<S>(network: &SharedNetwork, mut frames: S) -> IngestStats
where
    S: Stream<Item = String> + Unpin,
{
    let mut stats = IngestStats::default();

    while let Some(frame) = frames.next().await {
        stats.frames += 1;

        let messages = match decode_frame(&frame) {
            Ok(messages) => messages,
            Err(err) => {
                warn!(error = %err, "dropping malformed frame");
                stats.malformed += 1;
                continue;
            }
        };

        // One write lock per frame keeps a batch atomic for readers.
        let mut guard = network.write().await;
        for message in messages {
            let event = PassengerEvent::from(message);
            match guard.record_passenger_event(&event) {
                Ok(count) => {
                    trace!(station = %event.station_id, kind = %event.kind, count, "recorded event");
                    stats.recorded += 1;
                }
                Err(err) => {
                    warn!(station = %event.station_id, error = %err, "rejected passenger event");
                    stats.rejected += 1;
                }
            }
        }
    }

    info!(
        frames = stats.frames,
        recorded = stats.recorded,
        rejected = stats.rejected,
        malformed = stats.malformed,
        "event feed ended"
    );
    stats
}

/// Read a recorded feed: one frame per non-empty line
pub async fn read_event_log(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use futures_util::stream;
    use network_monitor_transit::prelude::*;

    use super::*;

    fn network() -> SharedNetwork {
        let mut network = TransportNetwork::new();
        network.add_station(&Station::new("s0", "Station 0")).unwrap();
        network.add_station(&Station::new("s1", "Station 1")).unwrap();
        SharedNetwork::new(network)
    }

    fn frame(kind: &str, station: &str) -> String {
        format!(
            r#"{{"datetime": "2020-11-01T07:18:50Z", "passenger_event": "{kind}", "station_id": "{station}"}}"#
        )
    }

    #[tokio::test]
    async fn test_ingest_counts() {
        let shared = network();
        let frames = vec![
            frame("in", "s0"),
            frame("in", "s0"),
            frame("out", "s1"),
            frame("in", "s9"),
            "not json".to_string(),
            frame("sideways", "s0"),
            format!("[{}, {}]", frame("out", "s0"), frame("in", "s1")),
        ];

        let stats = ingest_frames(&shared, stream::iter(frames)).await;

        assert_eq!(
            stats,
            IngestStats {
                frames: 7,
                recorded: 5,
                rejected: 1,
                malformed: 2,
            }
        );
        assert_eq!(shared.passenger_count(&"s0".into()).await, Ok(1));
        assert_eq!(shared.passenger_count(&"s1".into()).await, Ok(0));
    }

    #[tokio::test]
    async fn test_read_event_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.log");
        std::fs::write(&path, format!("{}\n\n{}\n", frame("in", "s0"), frame("out", "s0"))).unwrap();

        let frames = read_event_log(&path).await.unwrap();
        assert_eq!(frames.len(), 2);

        let shared = network();
        let stats = ingest_frames(&shared, stream::iter(frames)).await;
        assert_eq!(stats.recorded, 2);
        assert_eq!(shared.passenger_count(&"s0".into()).await, Ok(0));
    }
}
