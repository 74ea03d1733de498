use super::day::{deserialize_optional_day, DayOfWeek};
use super::string_or_number;
use crate::utils::time::{parse_date, timestamp};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Staff member of a shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade", default)]
    pub specialty: String,
    #[serde(rename = "ativo", default)]
    pub active: bool,
}

/// Barber fields sent on create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBarber {
    #[serde(rename = "barbeariaId")]
    pub barbearia_id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
}

/// Service offered by a shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "duracaoMin")]
    pub duration_min: u32,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "detalhes", default)]
    pub details: Option<String>,
}

/// Service fields sent on create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    #[serde(rename = "barbeariaId")]
    pub barbearia_id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "duracaoMin")]
    pub duration_min: u32,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "detalhes")]
    pub details: String,
}

/// Barber summary embedded in an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBarber {
    #[serde(rename = "nome")]
    pub name: String,
}

/// Block of time excluded from booking.
///
/// Without a barber it applies to the whole shop; with a date it applies to
/// that date only, otherwise it recurs on `day_of_week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub id: u64,
    #[serde(rename = "barbeariaId", default)]
    pub barbearia_id: Option<u64>,
    #[serde(rename = "barbeiroId", default)]
    pub barber_id: Option<u64>,
    #[serde(rename = "barbeiro", default)]
    pub barber: Option<IntervalBarber>,
    #[serde(
        rename = "diaSemana",
        default,
        deserialize_with = "deserialize_optional_day"
    )]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    #[serde(rename = "horaFim")]
    pub end_time: String,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
}

impl Interval {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Name of the barber, or the localized "all barbers" label
    pub fn barber_label(&self, locale: &str) -> String {
        match &self.barber {
            Some(barber) => barber.name.clone(),
            None => t!("all_barbers", locale = locale).to_string(),
        }
    }
}

/// Interval fields sent on create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInterval {
    #[serde(rename = "barbeariaId")]
    pub barbearia_id: u64,
    #[serde(rename = "barbeiroId")]
    pub barber_id: Option<u64>,
    #[serde(rename = "diaSemana")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    #[serde(rename = "horaFim")]
    pub end_time: String,
    #[serde(rename = "data")]
    pub date: Option<String>,
}

/// Payment status as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Approved,
    Pending,
    Other(String),
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "APROVADO" => PaymentStatus::Approved,
            "PENDENTE" => PaymentStatus::Pending,
            _ => PaymentStatus::Other(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Approved => "APROVADO".to_string(),
            PaymentStatus::Pending => "PENDENTE".to_string(),
            PaymentStatus::Other(raw) => raw,
        }
    }
}

impl PaymentStatus {
    pub fn label(&self, locale: &str) -> String {
        match self {
            PaymentStatus::Approved => t!("payment_approved", locale = locale).to_string(),
            PaymentStatus::Pending => t!("payment_pending", locale = locale).to_string(),
            PaymentStatus::Other(raw) => raw.clone(),
        }
    }
}

/// Plan payment made by the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "dataCriacao", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
}
