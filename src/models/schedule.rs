use super::day::DayOfWeek;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Opening hours for one day of the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    #[serde(rename = "diaSemana")]
    pub day_of_week: DayOfWeek,
    #[serde(rename = "horaInicio", default)]
    pub start_time: String,
    #[serde(rename = "horaFim", default)]
    pub end_time: String,
    #[serde(rename = "ativo", default)]
    pub is_open: bool,
}

impl WeeklyScheduleEntry {
    pub fn new(day_of_week: DayOfWeek, start_time: &str, end_time: &str, is_open: bool) -> Self {
        Self {
            day_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            is_open,
        }
    }

    /// Localized "open" / "closed" badge
    pub fn state_label(&self, locale: &str) -> String {
        if self.is_open {
            t!("hours_open", locale = locale).to_string()
        } else {
            t!("hours_closed", locale = locale).to_string()
        }
    }
}

/// One open day as submitted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHoursPayload {
    #[serde(rename = "barbeariaId")]
    pub barbearia_id: u64,
    #[serde(rename = "diaSemana")]
    pub day_of_week: DayOfWeek,
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    #[serde(rename = "horaFim")]
    pub end_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_names() {
        let entry: WeeklyScheduleEntry = serde_json::from_str(
            r#"{"diaSemana": "TERCA", "horaInicio": "08:00", "horaFim": "17:00", "ativo": true}"#,
        )
        .unwrap();
        assert_eq!(entry, WeeklyScheduleEntry::new(DayOfWeek::Tuesday, "08:00", "17:00", true));
        assert_eq!(entry.state_label("pt-BR"), "Aberto");
    }
}
