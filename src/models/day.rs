use chrono::Weekday;
use rust_i18n::t;
use serde::{Deserialize, Deserializer, Serialize};

/// Day symbol used by the backend for weekly records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "SEGUNDA")]
    Monday,
    #[serde(rename = "TERCA")]
    Tuesday,
    #[serde(rename = "QUARTA")]
    Wednesday,
    #[serde(rename = "QUINTA")]
    Thursday,
    #[serde(rename = "SEXTA")]
    Friday,
    #[serde(rename = "SABADO")]
    Saturday,
    #[serde(rename = "DOMINGO")]
    Sunday,
}

impl DayOfWeek {
    /// Display order of the business-hours editor
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Backend symbol, e.g. `SEGUNDA`
    pub fn symbol(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "SEGUNDA",
            DayOfWeek::Tuesday => "TERCA",
            DayOfWeek::Wednesday => "QUARTA",
            DayOfWeek::Thursday => "QUINTA",
            DayOfWeek::Friday => "SEXTA",
            DayOfWeek::Saturday => "SABADO",
            DayOfWeek::Sunday => "DOMINGO",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<DayOfWeek> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.symbol().eq_ignore_ascii_case(symbol.trim()))
    }

    pub fn label(self, locale: &str) -> String {
        match self {
            DayOfWeek::Monday => t!("weekday_monday", locale = locale),
            DayOfWeek::Tuesday => t!("weekday_tuesday", locale = locale),
            DayOfWeek::Wednesday => t!("weekday_wednesday", locale = locale),
            DayOfWeek::Thursday => t!("weekday_thursday", locale = locale),
            DayOfWeek::Friday => t!("weekday_friday", locale = locale),
            DayOfWeek::Saturday => t!("weekday_saturday", locale = locale),
            DayOfWeek::Sunday => t!("weekday_sunday", locale = locale),
        }
        .to_string()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Optional day field where the backend may send `""` or `null`
pub(crate) fn deserialize_optional_day<'de, D>(deserializer: D) -> Result<Option<DayOfWeek>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(symbol) => DayOfWeek::from_symbol(symbol)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown day of week: {}", symbol))),
    }
}
