use chrono::{DateTime, FixedOffset, Local, SecondsFormat, TimeZone};

/// Current wall-clock time in the system time zone.
///
/// Results and health checks are stamped with local time and the local offset,
/// never normalized to UTC.
pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Format a timestamp as ISO 8601 with microsecond precision and explicit offset
pub fn format_iso8601<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Shorthand for `format_iso8601(&local_now())`
pub fn now_iso8601() -> String {
    format_iso8601(&local_now())
}
