use crate::models::{Appointment, AppointmentStatus, Barber, Service};
use crate::utils::display::DisplaySettings;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Summary cards shown above the appointment list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub appointments_today: usize,
    pub active_barbers: usize,
    pub total_services: usize,
    /// Sum of completed appointments scheduled today
    pub revenue_today: Decimal,
}

impl DashboardStats {
    /// Compute the cards over the unfiltered data
    pub fn compute(
        appointments: &[Appointment],
        barbers: &[Barber],
        services: &[Service],
        display: &DisplaySettings,
        today: NaiveDate,
    ) -> Self {
        let todays: Vec<&Appointment> = appointments
            .iter()
            .filter(|a| display.local_date(&a.scheduled_at) == today)
            .collect();

        let revenue_today = todays
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .map(|a| a.service_price)
            .sum();

        Self {
            appointments_today: todays.len(),
            active_barbers: barbers.iter().filter(|b| b.active).count(),
            total_services: services.len(),
            revenue_today,
        }
    }
}

/// Number of today's appointments assigned to one barber
pub fn appointments_today_for_barber(
    appointments: &[Appointment],
    barber_id: u64,
    display: &DisplaySettings,
    today: NaiveDate,
) -> usize {
    appointments
        .iter()
        .filter(|a| a.barber_id == barber_id && display.local_date(&a.scheduled_at) == today)
        .count()
}
