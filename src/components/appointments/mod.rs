pub mod calendar;
pub mod export;
pub mod filter;
pub mod stats;

pub use calendar::{day_appointments, CalendarDay, CalendarMonth};
pub use export::{appointments_to_csv, export_appointments, export_filename, CsvExport};
pub use filter::{AppointmentFilter, DateRange};
pub use stats::{appointments_today_for_barber, DashboardStats};
