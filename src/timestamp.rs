//! Flexible timestamp decoding.
//!
//! The search API has emitted timestamps in three wire shapes across its
//! endpoints and versions: Unix epoch seconds as a JSON number, epoch seconds
//! as a numeric string, and RFC3339 date-time strings. [`FlexibleTimestamp`]
//! accepts all three on decode without per-endpoint configuration, and always
//! encodes back to one canonical shape: epoch seconds as a JSON number.
//!
//! The canonicalization is deliberately lossy — round-trips are guaranteed at
//! one-second granularity, not format-preserving.
//!
//! Decode rules:
//! - JSON number → epoch seconds (floats truncate toward zero).
//! - JSON string that parses entirely as an integer → epoch seconds.
//! - Any other JSON string → RFC3339 parse, normalized to UTC.
//! - JSON `null`, the empty string, or anything else → decode fails. A
//!   *missing* field is not the same as an explicit `null`: the containing
//!   document leaves a missing field unset without invoking decode at all.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// An instant in time tolerant of multiple wire encodings.
///
/// Internally a UTC instant; comparisons and ordering follow the instant, not
/// the wire form it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlexibleTimestamp(DateTime<Utc>);

impl FlexibleTimestamp {
    /// Construct from Unix epoch seconds.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(FlexibleTimestamp)
    }

    /// The current instant, truncated to whole seconds.
    pub fn now() -> Self {
        // Truncation keeps now() consistent with the wire granularity.
        FlexibleTimestamp(
            DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap_or_default(),
        )
    }

    /// Unix epoch seconds of this instant.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The instant as a chrono UTC date-time.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Parse a standalone JSON value into a timestamp.
    ///
    /// Applies the same decode rules as serde deserialization but reports the
    /// typed [`Error::InvalidTimeFormat`] instead of a serde error.
    pub fn parse(value: &serde_json::Value) -> Result<Self, Error> {
        use serde_json::Value;

        let parsed = match value {
            Value::Number(n) => {
                if let Some(secs) = n.as_i64() {
                    Self::from_unix(secs)
                } else {
                    n.as_f64().and_then(|f| Self::from_unix(f as i64))
                }
            }
            Value::String(s) => parse_string(s),
            _ => None,
        };

        parsed.ok_or_else(|| Error::InvalidTimeFormat {
            value: render_literal(value),
        })
    }
}

impl From<DateTime<Utc>> for FlexibleTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        FlexibleTimestamp(dt)
    }
}

/// Parse the string forms: whole-string integer epoch, then RFC3339.
fn parse_string(s: &str) -> Option<FlexibleTimestamp> {
    if s.is_empty() {
        return None;
    }
    if let Ok(secs) = s.parse::<i64>() {
        return FlexibleTimestamp::from_unix(secs);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| FlexibleTimestamp(dt.with_timezone(&Utc)))
}

fn render_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Serialize for FlexibleTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0.timestamp())
    }
}

impl<'de> Deserialize<'de> for FlexibleTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleTimestampVisitor)
    }
}

struct FlexibleTimestampVisitor;

impl<'de> de::Visitor<'de> for FlexibleTimestampVisitor {
    type Value = FlexibleTimestamp;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("Unix epoch seconds or an RFC3339 date-time string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        FlexibleTimestamp::from_unix(v).ok_or_else(|| invalid(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .ok()
            .and_then(FlexibleTimestamp::from_unix)
            .ok_or_else(|| invalid(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        FlexibleTimestamp::from_unix(v as i64).ok_or_else(|| invalid(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_string(v).ok_or_else(|| invalid(v))
    }

    // Explicit JSON null is a malformed value, never "absent".
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(invalid("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(invalid("null"))
    }
}

fn invalid<E: de::Error>(value: impl std::fmt::Display) -> E {
    E::custom(Error::InvalidTimeFormat {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<FlexibleTimestamp, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_decode_epoch_number() {
        let ts = decode(json!(1672531200)).unwrap();
        assert_eq!(ts.unix(), 1672531200);
    }

    #[test]
    fn test_decode_epoch_float_truncates() {
        let ts = decode(json!(1672531200.9)).unwrap();
        assert_eq!(ts.unix(), 1672531200);
    }

    #[test]
    fn test_decode_numeric_string_matches_number() {
        let from_string = decode(json!("1672531200")).unwrap();
        let from_number = decode(json!(1672531200)).unwrap();
        assert_eq!(from_string, from_number);
    }

    #[test]
    fn test_decode_negative_epoch() {
        let ts = decode(json!(-1)).unwrap();
        assert_eq!(ts.unix(), -1);
    }

    #[test]
    fn test_decode_rfc3339_utc() {
        let ts = decode(json!("2023-01-01T15:30:45Z")).unwrap();
        assert_eq!(ts.unix(), 1672587045);
    }

    #[test]
    fn test_rfc3339_offset_normalized_to_utc() {
        let with_offset = decode(json!("2023-01-01T12:30:45-03:00")).unwrap();
        let utc = decode(json!("2023-01-01T15:30:45Z")).unwrap();
        assert_eq!(with_offset, utc);
    }

    #[test]
    fn test_decode_rfc3339_fractional_seconds() {
        let ts = decode(json!("2023-01-01T15:30:45.123Z")).unwrap();
        assert_eq!(ts.unix(), 1672587045);
    }

    #[test]
    fn test_decode_null_fails() {
        let err = decode(json!(null)).unwrap_err();
        assert!(err.to_string().contains("invalid time format"));
    }

    #[test]
    fn test_decode_empty_string_fails() {
        let err = decode(json!("")).unwrap_err();
        assert!(err.to_string().contains("invalid time format"));
    }

    #[test]
    fn test_decode_garbage_string_fails() {
        let err = decode(json!("invalid-date")).unwrap_err();
        assert!(err.to_string().contains("invalid-date"));
    }

    #[test]
    fn test_parse_reports_typed_error() {
        let err = FlexibleTimestamp::parse(&json!("invalid-date")).unwrap_err();
        match err {
            Error::InvalidTimeFormat { value } => assert_eq!(value, "invalid-date"),
            other => panic!("expected InvalidTimeFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_null_reports_typed_error() {
        let err = FlexibleTimestamp::parse(&json!(null)).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_encode_is_epoch_number() {
        // Decoded from RFC3339, still encodes as epoch seconds.
        let ts = decode(json!("2023-01-01T15:30:45Z")).unwrap();
        let encoded = serde_json::to_value(ts).unwrap();
        assert_eq!(encoded, json!(1672587045));
    }

    #[test]
    fn test_round_trip_second_granularity() {
        let original = FlexibleTimestamp::from_unix(1754599843).unwrap();
        let encoded = serde_json::to_value(original).unwrap();
        let restored: FlexibleTimestamp = serde_json::from_value(encoded).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_from_datetime() {
        let dt = DateTime::from_timestamp(1700000000, 0).unwrap();
        let ts = FlexibleTimestamp::from(dt);
        assert_eq!(ts.unix(), 1700000000);
        assert_eq!(ts.datetime(), dt);
    }

    #[test]
    fn test_ordering_follows_instant() {
        let earlier = decode(json!("2023-01-01T00:00:00Z")).unwrap();
        let later = decode(json!(1700000000)).unwrap();
        assert!(earlier < later);
    }
}
