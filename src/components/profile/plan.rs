use crate::models::{Barbershop, Plan};
use chrono::{DateTime, Duration, Utc};
use rust_i18n::t;
use url::Url;

/// Length of a paid plan period
pub const PLAN_PERIOD_DAYS: i64 = 31;

/// Whole days left in the current plan period, rounded up and never negative.
///
/// `None` for closed shops or when the last update time is unknown.
pub fn days_remaining(shop: &Barbershop, now: DateTime<Utc>) -> Option<i64> {
    if matches!(shop.plan, Some(Plan::Closed)) {
        return None;
    }

    let expires_at = shop.updated_at()? + Duration::days(PLAN_PERIOD_DAYS);
    let left = (expires_at - now).num_seconds();
    let day = Duration::days(1).num_seconds();

    Some(((left + day - 1).div_euclid(day)).max(0))
}

/// Plan badge text, e.g. `Premium` and `12 dias restantes`
pub fn plan_summary(shop: &Barbershop, now: DateTime<Utc>, locale: &str) -> (String, Option<String>) {
    let label = match &shop.plan {
        Some(plan) => plan.label(locale),
        None => t!("plan_unknown", locale = locale).to_string(),
    };
    let remaining = days_remaining(shop, now)
        .map(|days| t!("plan_days_remaining", locale = locale, days = days).to_string());
    (label, remaining)
}

/// A logo can be shown when its URL is non-blank and absolute
pub fn is_valid_logo_url(url: Option<&str>) -> bool {
    match url.map(str::trim) {
        Some(raw) if !raw.is_empty() => Url::parse(raw).is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shop(plan: Plan, updated_at: &str) -> Barbershop {
        Barbershop {
            id: 1,
            plan: Some(plan),
            updated_at: Some(updated_at.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        let premium = shop(Plan::Premium, "2024-06-01T12:00:00Z");

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(days_remaining(&premium, now), Some(31));

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
        assert_eq!(days_remaining(&premium, now), Some(31));

        let now = Utc.with_ymd_and_hms(2024, 7, 2, 11, 0, 0).unwrap();
        assert_eq!(days_remaining(&premium, now), Some(1));
    }

    #[test]
    fn test_days_remaining_clamps_and_hides() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(&shop(Plan::Standard, "2024-06-01T12:00:00Z"), now), Some(0));
        assert_eq!(days_remaining(&shop(Plan::Closed, "2024-08-30T12:00:00Z"), now), None);

        let no_update = Barbershop {
            plan: Some(Plan::Premium),
            ..Default::default()
        };
        assert_eq!(days_remaining(&no_update, now), None);
    }

    #[test]
    fn test_plan_summary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let (label, remaining) = plan_summary(&shop(Plan::Premium, "2024-06-01T12:00:00Z"), now, "pt-BR");
        assert_eq!(label, "Premium");
        assert_eq!(remaining.as_deref(), Some("11 dias restantes"));
    }

    #[test]
    fn test_logo_url() {
        assert!(is_valid_logo_url(Some("https://cdn.example.com/logo.png")));
        assert!(!is_valid_logo_url(Some("   ")));
        assert!(!is_valid_logo_url(Some("logo.png")));
        assert!(!is_valid_logo_url(None));
    }
}
