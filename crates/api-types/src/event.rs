//! Live passenger event frames.
//!
//! Each text frame carries either one event object or an array of them:
//!
//! ```json
//! {"datetime": "2020-11-01T07:18:50.234000Z", "passenger_event": "in", "station_id": "station_0"}
//! ```

use chrono::{DateTime, Utc};
use network_monitor_transit::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{DecodeError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerEventMessage {
    pub datetime: DateTime<Utc>,
    pub passenger_event: PassengerEventKind,
    pub station_id: StationIdentifier,
}

impl From<PassengerEventMessage> for PassengerEvent {
    fn from(message: PassengerEventMessage) -> Self {
        PassengerEvent {
            station_id: message.station_id,
            kind: message.passenger_event,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Frame {
    One(PassengerEventMessage),
    Many(Vec<PassengerEventMessage>),
}

/// Decode one text frame into the events it carries
///
/// `passenger_event` must be `"in"` or `"out"`. Any other value fails the
/// whole frame.
pub fn decode_frame(text: &str) -> Result<Vec<PassengerEventMessage>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::EmptyFrame);
    }

    match serde_json::from_str::<Frame>(text)? {
        Frame::One(message) => Ok(vec![message]),
        Frame::Many(messages) => Ok(messages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_event() {
        let frame = r#"{"datetime": "2020-11-01T07:18:50.234000Z", "passenger_event": "in", "station_id": "station_0"}"#;
        let events = decode_frame(frame).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].passenger_event, PassengerEventKind::In);
        assert_eq!(events[0].station_id.as_str(), "station_0");
        assert_eq!(events[0].datetime.timestamp(), 1604215130);

        let event: PassengerEvent = events[0].clone().into();
        assert_eq!(event, PassengerEvent::new("station_0", PassengerEventKind::In));
    }

    #[test]
    fn test_decode_event_batch() {
        let frame = r#"[
            {"datetime": "2020-11-01T07:18:50Z", "passenger_event": "in", "station_id": "a"},
            {"datetime": "2020-11-01T07:18:51Z", "passenger_event": "out", "station_id": "b"}
        ]"#;
        let events = decode_frame(frame).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].passenger_event, PassengerEventKind::Out);
    }

    #[test]
    fn test_unknown_event_kind_is_rejected() {
        let frame = r#"{"datetime": "2020-11-01T07:18:50Z", "passenger_event": "through", "station_id": "a"}"#;
        assert!(matches!(decode_frame(frame), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_event_kind_is_lowercase_only() {
        for kind in ["In", "IN", "Out"] {
            let frame = format!(
                r#"{{"datetime": "2020-11-01T07:18:50Z", "passenger_event": "{kind}", "station_id": "a"}}"#
            );
            assert!(matches!(decode_frame(&frame), Err(DecodeError::Json(_))), "{kind}");
        }
    }

    #[test]
    fn test_empty_frame() {
        assert!(matches!(decode_frame("  \n"), Err(DecodeError::EmptyFrame)));
    }
}
