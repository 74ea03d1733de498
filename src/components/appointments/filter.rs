use crate::models::{Appointment, AppointmentStatus};
use crate::utils::display::DisplaySettings;
use crate::utils::time::{month_bounds, week_bounds};
use chrono::NaiveDate;

/// Date window of the appointment list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Today,
    /// Sunday-to-Saturday week containing today
    Week,
    Month,
    /// Inclusive on both ends; without both bounds nothing is filtered out
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateRange {
    /// First and last calendar date covered, or `None` when every date matches
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateRange::Today => Some((today, today)),
            DateRange::Week => Some(week_bounds(today)),
            DateRange::Month => Some(month_bounds(today)),
            DateRange::Custom {
                start: Some(start),
                end: Some(end),
            } => Some((start, end)),
            DateRange::Custom { .. } => None,
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.bounds(today) {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

/// Criteria applied to the appointment list.
///
/// `None` for status or barber means "all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppointmentFilter {
    pub date_range: DateRange,
    pub status: Option<AppointmentStatus>,
    pub barber_id: Option<u64>,
    pub search: String,
}

impl AppointmentFilter {
    fn matches_search(&self, appointment: &Appointment, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let client = appointment
            .client_name()
            .map(|name| name.to_lowercase().contains(needle))
            .unwrap_or(false);

        client || appointment.service_name.to_lowercase().contains(needle)
    }

    /// Matching appointments, most recent first.
    ///
    /// Dates are taken from the stored timestamp in the shop timezone,
    /// without the display correction.
    pub fn apply(
        &self,
        appointments: &[Appointment],
        display: &DisplaySettings,
        today: NaiveDate,
    ) -> Vec<Appointment> {
        let needle = self.search.trim().to_lowercase();

        let mut filtered: Vec<Appointment> = appointments
            .iter()
            .filter(|a| {
                self.date_range
                    .contains(display.local_date(&a.scheduled_at), today)
            })
            .filter(|a| self.status.map_or(true, |status| a.status == status))
            .filter(|a| self.barber_id.map_or(true, |id| a.barber_id == id))
            .filter(|a| self.matches_search(a, &needle))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
        filtered
    }
}
