pub mod forms;

pub use forms::{BarberForm, IntervalForm, ServiceForm};
