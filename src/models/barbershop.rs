use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Subscription plan of a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Plan {
    Standard,
    Premium,
    Closed,
    Unknown(String),
}

impl From<String> for Plan {
    fn from(value: String) -> Self {
        match value.as_str() {
            "STANDARD" => Plan::Standard,
            "PREMIUM" => Plan::Premium,
            "CLOSED" => Plan::Closed,
            _ => Plan::Unknown(value),
        }
    }
}

impl From<Plan> for String {
    fn from(plan: Plan) -> Self {
        match plan {
            Plan::Standard => "STANDARD".to_string(),
            Plan::Premium => "PREMIUM".to_string(),
            Plan::Closed => "CLOSED".to_string(),
            Plan::Unknown(raw) => raw,
        }
    }
}

impl Plan {
    pub fn label(&self, locale: &str) -> String {
        match self {
            Plan::Standard => t!("plan_standard", locale = locale),
            Plan::Premium => t!("plan_premium", locale = locale),
            Plan::Closed => t!("plan_closed", locale = locale),
            Plan::Unknown(_) => t!("plan_unknown", locale = locale),
        }
        .to_string()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Plan::Closed)
    }
}

/// Shop profile as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barbershop {
    pub id: u64,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "nomeProprietario", default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "cep", default)]
    pub postal_code: Option<String>,
    #[serde(rename = "bairro", default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "complemento", default)]
    pub complement: Option<String>,
    #[serde(rename = "pontoReferencia", default)]
    pub reference_point: Option<String>,
    #[serde(rename = "plano", default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

impl Barbershop {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }
}

/// Editable profile fields sent on update; missing values are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarbershopUpdate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nomeProprietario")]
    pub owner_name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "complemento")]
    pub complement: String,
    #[serde(rename = "pontoReferencia")]
    pub reference_point: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_wire() {
        let shop: Barbershop = serde_json::from_str(
            r#"{"id": 1, "nome": "Navalha", "plano": "PREMIUM", "updatedAt": "2024-06-01T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(shop.plan, Some(Plan::Premium));
        assert!(shop.updated_at().is_some());
        assert!(shop.owner_name.is_none());

        let odd: Plan = serde_json::from_str(r#""TRIAL""#).unwrap();
        assert_eq!(odd, Plan::Unknown("TRIAL".to_string()));
        assert_eq!(serde_json::to_string(&odd).unwrap(), r#""TRIAL""#);
    }

    #[test]
    fn test_plan_labels() {
        assert_eq!(Plan::Standard.label("pt-BR"), "Standard");
        assert_eq!(Plan::Closed.label("pt-BR"), "Inativo");
        assert!(!Plan::Closed.is_active());
        assert!(Plan::Premium.is_active());
    }

    #[test]
    fn test_update_uses_backend_field_names() {
        let update = BarbershopUpdate {
            name: "Navalha".to_string(),
            reference_point: "Perto da praça".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["nome"], "Navalha");
        assert_eq!(json["pontoReferencia"], "Perto da praça");
        assert_eq!(json["cep"], "");
    }
}
