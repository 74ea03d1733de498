use crate::models::{Appointment, DayOfWeek};
use crate::utils::display::DisplaySettings;
use crate::utils::time::month_bounds;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: DayOfWeek,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_appointments: bool,
}

/// Month grid starting on Sunday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    /// First day of the month shown
    pub month: NaiveDate,
    /// Empty cells before the first day
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Build the grid for the month containing `month`.
    ///
    /// A day has appointments when one is stored on that calendar date,
    /// before the display correction.
    pub fn build(
        month: NaiveDate,
        selected: NaiveDate,
        today: NaiveDate,
        appointments: &[Appointment],
        display: &DisplaySettings,
    ) -> Self {
        let (first, last) = month_bounds(month);
        let booked: HashSet<NaiveDate> = appointments
            .iter()
            .map(|a| display.local_date(&a.scheduled_at))
            .collect();

        let days = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| CalendarDay {
                date,
                weekday: date.weekday().into(),
                is_selected: date == selected,
                is_today: date == today,
                has_appointments: booked.contains(&date),
            })
            .collect();

        Self {
            month: first,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Month title, e.g. `06/2024`
    pub fn title(&self) -> String {
        self.month.format("%m/%Y").to_string()
    }
}

/// Appointments displayed on `date`, earliest first
pub fn day_appointments(
    appointments: &[Appointment],
    date: NaiveDate,
    display: &DisplaySettings,
) -> Vec<Appointment> {
    let mut day: Vec<Appointment> = appointments
        .iter()
        .filter(|a| display.display_date(&a.scheduled_at) == date)
        .cloned()
        .collect();
    day.sort_by_key(|a| a.scheduled_at);
    day
}
