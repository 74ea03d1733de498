use crate::models::{BusinessHoursPayload, DayOfWeek, WeeklyScheduleEntry};
use rust_i18n::t;

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "18:00";
/// Day closed in the default week
pub const DEFAULT_CLOSED_DAY: DayOfWeek = DayOfWeek::Sunday;

/// Default week: every day 09:00-18:00, open except Sunday
pub fn default_week() -> Vec<WeeklyScheduleEntry> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            WeeklyScheduleEntry::new(
                day,
                DEFAULT_START_TIME,
                DEFAULT_END_TIME,
                day != DEFAULT_CLOSED_DAY,
            )
        })
        .collect()
}

/// One entry per day in display order.
///
/// The first entry for a day wins; days without one get a closed 09:00-18:00 entry.
pub fn complete_week(entries: &[WeeklyScheduleEntry]) -> Vec<WeeklyScheduleEntry> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            entries
                .iter()
                .find(|entry| entry.day_of_week == day)
                .cloned()
                .unwrap_or_else(|| {
                    WeeklyScheduleEntry::new(day, DEFAULT_START_TIME, DEFAULT_END_TIME, false)
                })
        })
        .collect()
}

/// Check every open day; returns the localized reason of the first failure.
///
/// Times are zero-padded `HH:MM`, so string order equals time order.
pub fn validate_week(entries: &[WeeklyScheduleEntry], locale: &str) -> Result<(), String> {
    for entry in entries.iter().filter(|entry| entry.is_open) {
        if entry.start_time.trim().is_empty() || entry.end_time.trim().is_empty() {
            return Err(t!("hours_error_missing_times", locale = locale).to_string());
        }

        if entry.start_time >= entry.end_time {
            return Err(t!("hours_error_start_after_end", locale = locale).to_string());
        }
    }
    Ok(())
}

/// Payload for the open days only
pub fn open_days_payload(
    barbearia_id: u64,
    entries: &[WeeklyScheduleEntry],
) -> Vec<BusinessHoursPayload> {
    entries
        .iter()
        .filter(|entry| entry.is_open)
        .map(|entry| BusinessHoursPayload {
            barbearia_id,
            day_of_week: entry.day_of_week,
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
        })
        .collect()
}
