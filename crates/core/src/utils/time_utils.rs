use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for reporting dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
/// For a US-focused deployment, America/New_York is a sensible default.
pub const DEFAULT_REPORTING_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a reporting date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Use this whenever you need to derive a "business date" from a timestamp.
///
/// # Arguments
/// * `instant` - The UTC timestamp to convert
/// * `tz` - The timezone to use for the conversion
pub fn reporting_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default reporting timezone.
/// Equivalent to `reporting_date_from_utc(Utc::now(), DEFAULT_REPORTING_TZ)`.
pub fn reporting_date_today() -> NaiveDate {
    reporting_date_from_utc(Utc::now(), DEFAULT_REPORTING_TZ)
}

/// Whole calendar months between two dates, from year/month components only.
/// Day-of-month is ignored: Jan 31 to Feb 1 counts as one month.
/// Negative when `to` falls in an earlier month than `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}
