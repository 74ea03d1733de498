use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_i18n::t;

/// Everything needed to turn stored values into user-facing text.
///
/// Calendar dates used for filtering come from the stored timestamp in
/// `timezone`. Rendered dates and times add `offset` first.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub timezone: Tz,
    pub offset: Duration,
    pub locale: String,
}

impl DisplaySettings {
    pub fn new(timezone: Tz, offset_hours: i64, locale: &str) -> Self {
        Self {
            timezone,
            offset: Duration::hours(offset_hours),
            locale: locale.to_string(),
        }
    }

    /// Calendar date of a stored timestamp, without display correction
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    /// Today's calendar date in the shop timezone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.local_date(&now)
    }

    /// Stored timestamp shifted by the display correction
    pub fn corrected(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone) + self.offset
    }

    /// Calendar date shown to the user for a stored timestamp
    pub fn display_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.corrected(instant).date_naive()
    }

    /// Corrected date, e.g. `10/06/2024`
    pub fn format_date(&self, instant: &DateTime<Utc>) -> String {
        self.format_naive_date(self.display_date(instant))
    }

    /// Corrected time, e.g. `12:00`
    pub fn format_time(&self, instant: &DateTime<Utc>) -> String {
        let fmt = t!("time_format", locale = &self.locale);
        self.corrected(instant).format(fmt.as_ref()).to_string()
    }

    /// Uncorrected date and time, used for payment records
    pub fn format_datetime(&self, instant: &DateTime<Utc>) -> String {
        let fmt = t!("datetime_format", locale = &self.locale);
        instant
            .with_timezone(&self.timezone)
            .format(fmt.as_ref())
            .to_string()
    }

    pub fn format_naive_date(&self, date: NaiveDate) -> String {
        let fmt = t!("date_format", locale = &self.locale);
        date.format(fmt.as_ref()).to_string()
    }

    /// Localized currency, e.g. `R$ 1.234,50`
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.2}", rounded.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let thousands = t!("thousands_separator", locale = &self.locale);
        let decimal = t!("decimal_separator", locale = &self.locale);

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push_str(thousands.as_ref());
            }
            grouped.push(ch);
        }

        let amount = format!("{}{}{}", grouped, decimal, fraction);
        let formatted = t!("currency_format", locale = &self.locale, amount = amount).to_string();
        if negative {
            format!("-{}", formatted)
        } else {
            formatted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn pt_br() -> DisplaySettings {
        DisplaySettings::new(chrono_tz::America::Sao_Paulo, 3, "pt-BR")
    }

    #[test]
    fn test_offset_compensates_shop_timezone() {
        let settings = pt_br();
        let stored = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();

        // 12:00Z is 09:00 in São Paulo, shown as 12:00 after the correction
        assert_eq!(settings.format_time(&stored), "12:00");
        assert_eq!(settings.format_date(&stored), "10/06/2024");
    }

    #[test]
    fn test_correction_can_move_the_displayed_date() {
        let settings = pt_br();
        // 23:30 local on the 10th, displayed as 02:30 on the 11th
        let stored = Utc.with_ymd_and_hms(2024, 6, 11, 2, 30, 0).unwrap();

        assert_eq!(settings.local_date(&stored), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(settings.display_date(&stored), NaiveDate::from_ymd_opt(2024, 6, 11).unwrap());
    }

    #[test]
    fn test_format_currency_pt_br() {
        let settings = pt_br();
        assert_eq!(settings.format_currency(Decimal::from_str("50").unwrap()), "R$ 50,00");
        assert_eq!(settings.format_currency(Decimal::from_str("1234.5").unwrap()), "R$ 1.234,50");
        assert_eq!(
            settings.format_currency(Decimal::from_str("1234567.891").unwrap()),
            "R$ 1.234.567,89"
        );
        assert_eq!(settings.format_currency(Decimal::from_str("-15").unwrap()), "-R$ 15,00");
        assert_eq!(settings.format_currency(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_en() {
        let settings = DisplaySettings::new(chrono_tz::UTC, 0, "en");
        assert_eq!(settings.format_currency(Decimal::from_str("1234.5").unwrap()), "R$1,234.50");
    }

    #[test]
    fn test_format_datetime_has_no_correction() {
        let settings = pt_br();
        let stored = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        assert_eq!(settings.format_datetime(&stored), "10/06/2024 09:00");
    }
}
