//! ISO-8601 timestamp helpers shared by the case converter and shape transforms
//!
//! Inbound timestamps arrive as ISO-8601 strings and become `DateTime<Utc>`;
//! outbound instants are formatted with millisecond precision and a `Z` suffix,
//! matching what the remote API emits.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};

/// Parse a wire timestamp string, naming the field on failure.
pub(crate) fn parse(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::Timestamp {
            field,
            value: value.to_string(),
            source,
        })
}

/// Parse an optional wire timestamp, coalescing absent/null to `None`.
pub(crate) fn parse_opt(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>> {
    value.map(|v| parse(field, v)).transpose()
}

/// Format an instant as an ISO-8601 string, e.g. `2024-01-01T00:00:00.000Z`.
pub(crate) fn format(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc_instant() {
        let parsed = parse("started_at", "2024-01-01T00:00:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_normalizes_offset_to_utc() {
        let parsed = parse("started_at", "2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_failure_names_field_and_value() {
        let err = parse("dms_disabled_until", "tomorrow").unwrap_err();
        match err {
            Error::Timestamp { field, value, .. } => {
                assert_eq!(field, "dms_disabled_until");
                assert_eq!(value, "tomorrow");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_opt_coalesces_absent() {
        assert_eq!(parse_opt("raid_detected_at", None).unwrap(), None);
    }

    #[test]
    fn test_format_millisecond_precision() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        assert_eq!(format(&instant), "2024-06-15T12:30:45.000Z");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let instant = Utc.with_ymd_and_hms(2031, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(parse("start", &format(&instant)).unwrap(), instant);
    }
}
