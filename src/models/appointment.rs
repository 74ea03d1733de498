use crate::error::{DashboardResult, Error};
use crate::utils::time::timestamp;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Client attached to an appointment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
}

/// Appointment as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    #[serde(rename = "dataHora", with = "timestamp")]
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(rename = "precoServico")]
    pub service_price: Decimal,
    #[serde(rename = "nomeServico", default)]
    pub service_name: String,
    #[serde(rename = "barbeiroId")]
    pub barber_id: u64,
    #[serde(rename = "cliente", default)]
    pub client: Option<Client>,
}

impl Appointment {
    pub fn client_name(&self) -> Option<&str> {
        self.client.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn client_phone(&self) -> Option<&str> {
        self.client.as_ref().and_then(|c| c.phone.as_deref())
    }

    /// Status reached by applying `action`, or an error if the current status forbids it
    pub fn next_status(&self, action: StatusAction) -> DashboardResult<AppointmentStatus> {
        self.status.apply(action)
    }
}

/// Lifecycle of an appointment.
///
/// `Scheduled` is the only state with outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "AGENDAMENTO_PROGRAMADO")]
    Scheduled,
    #[serde(rename = "ATENDIDO")]
    Completed,
    #[serde(rename = "CANCELADO")]
    Canceled,
}

/// Color family used when rendering a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Success,
    Danger,
}

/// Icon shown next to a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Clock,
    CheckCircle,
    XCircle,
}

/// User actions that change an appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    MarkCompleted,
    Cancel,
}

impl StatusAction {
    pub fn target(self) -> AppointmentStatus {
        match self {
            StatusAction::MarkCompleted => AppointmentStatus::Completed,
            StatusAction::Cancel => AppointmentStatus::Canceled,
        }
    }

    pub fn label(self, locale: &str) -> String {
        match self {
            StatusAction::MarkCompleted => t!("action_mark_completed", locale = locale),
            StatusAction::Cancel => t!("action_cancel", locale = locale),
        }
        .to_string()
    }
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Canceled,
    ];

    /// Backend symbol
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "AGENDAMENTO_PROGRAMADO",
            AppointmentStatus::Completed => "ATENDIDO",
            AppointmentStatus::Canceled => "CANCELADO",
        }
    }

    pub fn label(self, locale: &str) -> String {
        match self {
            AppointmentStatus::Scheduled => t!("status_scheduled", locale = locale),
            AppointmentStatus::Completed => t!("status_completed", locale = locale),
            AppointmentStatus::Canceled => t!("status_canceled", locale = locale),
        }
        .to_string()
    }

    pub fn tone(self) -> StatusTone {
        match self {
            AppointmentStatus::Scheduled => StatusTone::Warning,
            AppointmentStatus::Completed => StatusTone::Success,
            AppointmentStatus::Canceled => StatusTone::Danger,
        }
    }

    pub fn icon(self) -> StatusIcon {
        match self {
            AppointmentStatus::Scheduled => StatusIcon::Clock,
            AppointmentStatus::Completed => StatusIcon::CheckCircle,
            AppointmentStatus::Canceled => StatusIcon::XCircle,
        }
    }

    /// Actions offered for an appointment in this status
    pub fn available_actions(self) -> &'static [StatusAction] {
        match self {
            AppointmentStatus::Scheduled => &[StatusAction::MarkCompleted, StatusAction::Cancel],
            AppointmentStatus::Completed | AppointmentStatus::Canceled => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.available_actions().is_empty()
    }

    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self.available_actions()
            .iter()
            .any(|action| action.target() == next)
    }

    pub fn apply(self, action: StatusAction) -> DashboardResult<AppointmentStatus> {
        let next = action.target();
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| Error::Serialization(format!("Unknown appointment status: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 12,
            "dataHora": "2024-06-10T12:00:00.000Z",
            "status": "ATENDIDO",
            "precoServico": 50.0,
            "nomeServico": "Corte",
            "barbeiroId": 3,
            "cliente": { "nome": "Ana", "telefone": "11999990000" }
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, 12);
        assert_eq!(appointment.status, AppointmentStatus::Completed);
        assert_eq!(appointment.service_price, Decimal::new(50, 0));
        assert_eq!(appointment.client_name(), Some("Ana"));
        assert_eq!(appointment.client_phone(), Some("11999990000"));
    }

    #[test]
    fn test_missing_client_is_none() {
        let json = r#"{
            "id": 1,
            "dataHora": "2024-06-10T12:00:00Z",
            "status": "AGENDAMENTO_PROGRAMADO",
            "precoServico": "35.50",
            "nomeServico": "Barba",
            "barbeiroId": 1
        }"#;

        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.client.is_none());
        assert_eq!(appointment.client_name(), None);
        assert_eq!(appointment.service_price, Decimal::new(3550, 2));
    }

    #[test]
    fn test_transitions_only_leave_scheduled() {
        let scheduled = AppointmentStatus::Scheduled;
        assert_eq!(scheduled.apply(StatusAction::MarkCompleted).unwrap(), AppointmentStatus::Completed);
        assert_eq!(scheduled.apply(StatusAction::Cancel).unwrap(), AppointmentStatus::Canceled);

        for terminal in [AppointmentStatus::Completed, AppointmentStatus::Canceled] {
            assert!(terminal.is_terminal());
            assert!(terminal.apply(StatusAction::Cancel).is_err());
            assert!(terminal.apply(StatusAction::MarkCompleted).is_err());
        }
    }

    #[test]
    fn test_labels_and_badges() {
        assert_eq!(AppointmentStatus::Completed.label("pt-BR"), "Concluído");
        assert_eq!(AppointmentStatus::Scheduled.label("pt-BR"), "Pendente");
        assert_eq!(AppointmentStatus::Canceled.label("en"), "Canceled");
        assert_eq!(AppointmentStatus::Canceled.tone(), StatusTone::Danger);
        assert_eq!(AppointmentStatus::Scheduled.icon(), StatusIcon::Clock);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("CANCELADO".parse::<AppointmentStatus>().unwrap(), AppointmentStatus::Canceled);
        assert!("REMARCADO".parse::<AppointmentStatus>().is_err());
    }
}
