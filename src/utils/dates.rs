use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse the ISO strings calamine produces for `DateTimeIso` cells.
pub fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_end_matches('Z');

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Whether the value carries a time-of-day component
#[must_use]
pub fn has_time(datetime: &NaiveDateTime) -> bool {
    datetime.time() != NaiveTime::MIN
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    if has_time(datetime) {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%d").to_string()
    }
}

pub fn format_iso(datetime: &NaiveDateTime) -> String {
    if has_time(datetime) {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        datetime.format("%Y-%m-%d").to_string()
    }
}
