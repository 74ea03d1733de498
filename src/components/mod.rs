// Export components
pub mod appointments;
pub mod business_hours;
pub mod catalog;
pub mod dashboard;
pub mod profile;

// Re-export the entry points
pub use business_hours::BusinessHoursEditor;
pub use dashboard::{DashboardHandle, DashboardState};
pub use profile::ProfileEditor;
