use chrono::{DateTime, Local, TimeZone, Utc};

/// Convert an epoch-milliseconds timestamp to UTC.
///
/// Out-of-range values clamp to the epoch rather than panicking; stored
/// records are runner-written and occasionally carry garbage.
pub fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Human-readable local timestamp for an epoch-milliseconds value
pub fn format_local(millis: i64) -> String {
    datetime_from_millis(millis)
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_from_millis() {
        let dt = datetime_from_millis(1_700_000_000_000);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_out_of_range_clamps_to_epoch() {
        let dt = datetime_from_millis(i64::MAX);
        assert_eq!(dt.timestamp_millis(), 0);
    }

    #[test]
    fn test_format_local_is_nonempty() {
        assert!(!format_local(1_700_000_000_000).is_empty());
    }
}
