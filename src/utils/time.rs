use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

/// Source of the current instant, injectable for tests
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Clock backed by the system time
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Clock frozen at a fixed instant
pub fn fixed_clock(instant: DateTime<Utc>) -> Clock {
    Arc::new(move || instant)
}

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-06-10T12:00:00.000Z`, `2024-06-10T09:00:00-03:00`)
/// and naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`, which is read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a `YYYY-MM-DD` date, also accepting a full timestamp and keeping its date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(value).map(|dt| dt.date_naive()))
}

/// Sunday-to-Saturday week containing `today`
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_since_sunday = today.weekday().num_days_from_sunday() as i64;
    let sunday = today
        .checked_sub_signed(Duration::days(days_since_sunday))
        .unwrap_or(today);
    let saturday = sunday.checked_add_signed(Duration::days(6)).unwrap_or(sunday);
    (sunday, saturday)
}

/// First and last day of the month containing `today`
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = shift_month(first, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (first, last)
}

/// First day of the month `months` away from the month of `date`
pub fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Serde adapter for backend timestamps
pub mod timestamp {
    use super::parse_timestamp;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}
