// Touch-ESP - Press Records
//
// Wire shape expected by the collector:
//   {"device":"touch_esp","sensor":<1-based>,"state":<0|1>,"ts":<ms since boot>}

use anyhow::Context;
use serde::Serialize;

use crate::debounce::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressRecord<'a> {
    pub device: &'a str,
    /// 1-based sensor number (channel index + 1).
    pub sensor: usize,
    pub state: u8,
    pub ts: u64,
}

pub fn build_record<'a>(device: &'a str, transition: &Transition) -> PressRecord<'a> {
    PressRecord {
        device,
        sensor: transition.channel + 1,
        state: u8::from(transition.new),
        ts: transition.timestamp,
    }
}

/// Serialize a record into one datagram payload (compact JSON).
pub fn encode(record: &PressRecord<'_>) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec(record)
        .with_context(|| format!("encoding record for sensor {}", record.sensor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_number_is_one_based() {
        let t = Transition {
            channel: 2,
            previous: false,
            new: true,
            timestamp: 1234,
        };
        assert_eq!(
            build_record("touch_esp", &t),
            PressRecord {
                device: "touch_esp",
                sensor: 3,
                state: 1,
                ts: 1234,
            }
        );
    }

    #[test]
    fn release_has_state_zero() {
        let t = Transition {
            channel: 0,
            previous: true,
            new: false,
            timestamp: 115,
        };
        let record = build_record("touch_esp", &t);
        assert_eq!(record.sensor, 1);
        assert_eq!(record.state, 0);
    }

    #[test]
    fn encodes_compact_json() {
        let record = PressRecord {
            device: "touch_esp",
            sensor: 3,
            state: 1,
            ts: 1234,
        };
        let bytes = encode(&record).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"device":"touch_esp","sensor":3,"state":1,"ts":1234}"#
        );
    }

    #[test]
    fn encoded_fields_parse_back() {
        let record = PressRecord {
            device: "touch_esp",
            sensor: 5,
            state: 0,
            ts: 4_000_000_000,
        };
        let value: serde_json::Value = serde_json::from_slice(&encode(&record).unwrap()).unwrap();
        assert_eq!(value["device"], "touch_esp");
        assert_eq!(value["sensor"], 5);
        assert_eq!(value["state"], 0);
        assert_eq!(value["ts"], 4_000_000_000u64);
    }
}
