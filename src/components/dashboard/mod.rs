mod actor;
mod handle;

pub use actor::DashboardState;
pub use handle::DashboardHandle;
