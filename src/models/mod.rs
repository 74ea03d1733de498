pub mod appointment;
pub mod barbershop;
pub mod catalog;
pub mod day;
pub mod schedule;

pub use appointment::{Appointment, AppointmentStatus, Client, StatusAction, StatusIcon, StatusTone};
pub use barbershop::{Barbershop, BarbershopUpdate, Plan};
pub use catalog::{
    Barber, Interval, IntervalBarber, NewBarber, NewInterval, NewService, Payment, PaymentStatus,
    Service,
};
pub use day::DayOfWeek;
pub use schedule::{BusinessHoursPayload, WeeklyScheduleEntry};

use serde::{de, Deserialize, Deserializer};

/// Accept identifiers sent either as JSON strings or numbers
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
