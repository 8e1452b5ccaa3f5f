// Date utility functions
// Wall-clock conversions between backend timestamps and the business time zone

use chrono::{
    DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Timelike,
};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Format minutes since midnight as a zero-padded `HH:MM` label.
pub fn format_hhmm(minutes_of_day: u32) -> String {
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an ISO-8601 timestamp into wall-clock time of `tz`.
///
/// Timestamps carrying an offset (or `Z`) are converted into `tz`; timestamps
/// without one are taken as already being business-local.
pub fn parse_timestamp(value: &str, tz: Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&tz).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Attach `tz` to a wall-clock time.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times
/// inside a DST gap do not exist, so they move forward by the gap length.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            log::warn!("{} does not exist in {}, shifting past the DST gap", naive, tz);
            let shifted = naive + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&naive))
        }
    }
}

/// RFC 3339 string (seconds precision, numeric offset) for a business-local time.
pub fn to_iso_string(naive: NaiveDateTime, tz: Tz) -> String {
    localize(naive, tz).to_rfc3339_opts(SecondsFormat::Secs, false)
}
