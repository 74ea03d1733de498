use crate::error::{validation_error, DashboardResult};
use crate::models::{
    Barber, DayOfWeek, Interval, NewBarber, NewInterval, NewService, Service,
};
use crate::utils::time::{parse_date, parse_time};
use rust_decimal::Decimal;
use rust_i18n::t;
use std::str::FromStr;

/// Barber being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarberForm {
    /// Set when editing an existing barber
    pub editing: Option<u64>,
    pub name: String,
    pub specialty: String,
}

impl BarberForm {
    pub fn from_barber(barber: &Barber) -> Self {
        Self {
            editing: Some(barber.id),
            name: barber.name.clone(),
            specialty: barber.specialty.clone(),
        }
    }

    pub fn validate(&self, barbearia_id: u64, locale: &str) -> DashboardResult<NewBarber> {
        let name = self.name.trim();
        let specialty = self.specialty.trim();
        if name.is_empty() || specialty.is_empty() {
            return Err(validation_error(&t!("barber_required_fields", locale = locale)));
        }

        Ok(NewBarber {
            barbearia_id,
            name: name.to_string(),
            specialty: specialty.to_string(),
        })
    }
}

/// Service being created or edited; numeric fields hold raw user input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub editing: Option<u64>,
    pub name: String,
    pub duration_min: String,
    pub price: String,
    pub details: String,
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        Self {
            editing: Some(service.id),
            name: service.name.clone(),
            duration_min: service.duration_min.to_string(),
            price: service.price.to_string(),
            details: service.details.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self, barbearia_id: u64, locale: &str) -> DashboardResult<NewService> {
        let name = self.name.trim();
        let duration = self.duration_min.trim();
        let price = self.price.trim();
        if name.is_empty() || duration.is_empty() || price.is_empty() {
            return Err(validation_error(&t!("service_required_fields", locale = locale)));
        }

        let duration_min = duration.parse::<u32>().map_err(|_| {
            validation_error(&t!("service_invalid_duration", locale = locale, value = duration))
        })?;

        // Accept both "45.50" and "45,50"
        let price = Decimal::from_str(&price.replace(',', "."))
            .ok()
            .filter(|p| !p.is_sign_negative())
            .ok_or_else(|| {
                validation_error(&t!("service_invalid_price", locale = locale, value = price))
            })?;

        Ok(NewService {
            barbearia_id,
            name: name.to_string(),
            duration_min,
            price,
            details: self.details.trim().to_string(),
        })
    }
}

/// Interval being created or edited.
///
/// No barber means the interval blocks every barber; no date means it recurs
/// on `day_of_week`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalForm {
    pub editing: Option<u64>,
    pub barber_id: Option<u64>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: String,
    pub end_time: String,
    /// `YYYY-MM-DD`, empty when unset
    pub date: String,
}

impl IntervalForm {
    pub fn from_interval(interval: &Interval) -> Self {
        Self {
            editing: Some(interval.id),
            barber_id: interval.barber_id,
            day_of_week: interval.day_of_week,
            start_time: interval.start_time.clone(),
            end_time: interval.end_time.clone(),
            date: interval
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self, barbearia_id: u64, locale: &str) -> DashboardResult<NewInterval> {
        let start = self.start_time.trim();
        let end = self.end_time.trim();
        if start.is_empty() || end.is_empty() {
            return Err(validation_error(&t!("interval_required_fields", locale = locale)));
        }

        for value in [start, end] {
            if parse_time(value).is_none() {
                return Err(validation_error(&t!(
                    "interval_invalid_time",
                    locale = locale,
                    value = value
                )));
            }
        }

        let date = match self.date.trim() {
            "" => None,
            raw => {
                let parsed = parse_date(raw).ok_or_else(|| {
                    validation_error(&t!("interval_invalid_date", locale = locale, value = raw))
                })?;
                Some(parsed.format("%Y-%m-%d").to_string())
            }
        };

        Ok(NewInterval {
            barbearia_id,
            barber_id: self.barber_id,
            day_of_week: self.day_of_week,
            start_time: start.to_string(),
            end_time: end.to_string(),
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::IntervalBarber;

    #[test]
    fn test_barber_requires_name_and_specialty() {
        let form = BarberForm {
            name: "João".to_string(),
            specialty: "  ".to_string(),
            ..Default::default()
        };
        match form.validate(1, "pt-BR") {
            Err(Error::Validation(message)) => {
                assert_eq!(message, "Nome e especialidade são obrigatórios")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let form = BarberForm {
            specialty: "Degradê".to_string(),
            ..form
        };
        let barber = form.validate(1, "pt-BR").unwrap();
        assert_eq!(barber.name, "João");
        assert_eq!(barber.barbearia_id, 1);
    }

    #[test]
    fn test_service_parses_duration_and_price() {
        let form = ServiceForm {
            name: "Corte".to_string(),
            duration_min: "30".to_string(),
            price: "45,50".to_string(),
            ..Default::default()
        };
        let service = form.validate(2, "pt-BR").unwrap();
        assert_eq!(service.duration_min, 30);
        assert_eq!(service.price, Decimal::new(4550, 2));
        assert_eq!(service.details, "");

        let bad_duration = ServiceForm {
            duration_min: "meia hora".to_string(),
            ..form.clone()
        };
        assert!(bad_duration.validate(2, "pt-BR").is_err());

        let missing_price = ServiceForm {
            price: String::new(),
            ..form
        };
        assert!(missing_price.validate(2, "pt-BR").is_err());
    }

    #[test]
    fn test_service_form_round_trips_existing_service() {
        let service = Service {
            id: 5,
            name: "Barba".to_string(),
            duration_min: 20,
            price: Decimal::new(2500, 2),
            details: None,
        };
        let form = ServiceForm::from_service(&service);
        assert_eq!(form.editing, Some(5));
        assert_eq!(form.price, "25.00");
        assert_eq!(form.validate(1, "en").unwrap().price, Decimal::new(2500, 2));
    }

    #[test]
    fn test_interval_prefill_and_validation() {
        let interval = Interval {
            id: 9,
            barbearia_id: Some(1),
            barber_id: Some(3),
            barber: Some(IntervalBarber {
                name: "Carlos".to_string(),
            }),
            day_of_week: None,
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
            date: Some("2024-06-12T00:00:00.000Z".to_string()),
        };

        let form = IntervalForm::from_interval(&interval);
        assert_eq!(form.date, "2024-06-12");
        assert_eq!(form.editing, Some(9));

        let payload = form.validate(1, "pt-BR").unwrap();
        assert_eq!(payload.date.as_deref(), Some("2024-06-12"));
        assert_eq!(payload.barber_id, Some(3));

        let missing_end = IntervalForm {
            end_time: String::new(),
            ..IntervalForm::default()
        };
        assert!(missing_end.validate(1, "pt-BR").is_err());

        let bad_time = IntervalForm {
            start_time: "25:00".to_string(),
            end_time: "13:00".to_string(),
            ..IntervalForm::default()
        };
        assert!(bad_time.validate(1, "pt-BR").is_err());
    }
}
