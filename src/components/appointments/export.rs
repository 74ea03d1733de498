use crate::error::{Error, DashboardResult};
use crate::models::{Appointment, Barber};
use crate::utils::display::DisplaySettings;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use tracing::info;

/// CSV document built in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// Write the document into `dir` and return the full path
    pub async fn write_to(&self, dir: &Path) -> DashboardResult<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, self.content.as_bytes()).await?;
        info!("Exported appointments to {}", path.display());
        Ok(path)
    }
}

/// `agendamentos_<UTC date>.csv`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("agendamentos_{}.csv", now.format("%Y-%m-%d"))
}

fn headers(locale: &str) -> [String; 8] {
    [
        t!("csv_date", locale = locale).to_string(),
        t!("csv_time", locale = locale).to_string(),
        t!("csv_client", locale = locale).to_string(),
        t!("csv_phone", locale = locale).to_string(),
        t!("csv_service", locale = locale).to_string(),
        t!("csv_barber", locale = locale).to_string(),
        t!("csv_value", locale = locale).to_string(),
        t!("csv_status", locale = locale).to_string(),
    ]
}

/// Render `appointments` as CSV with every cell quoted.
///
/// Dates, times and amounts are formatted like the list view; missing client
/// or barber data is written as the localized "not available" marker.
pub fn appointments_to_csv(
    appointments: &[Appointment],
    barbers: &[Barber],
    display: &DisplaySettings,
) -> DashboardResult<String> {
    let locale = display.locale.as_str();
    let missing = t!("not_available", locale = locale).to_string();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(headers(locale))?;

    for appointment in appointments {
        let barber = barbers
            .iter()
            .find(|b| b.id == appointment.barber_id)
            .map(|b| b.name.as_str())
            .unwrap_or(missing.as_str());

        writer.write_record([
            display.format_date(&appointment.scheduled_at).as_str(),
            display.format_time(&appointment.scheduled_at).as_str(),
            appointment.client_name().unwrap_or(missing.as_str()),
            appointment.client_phone().unwrap_or(missing.as_str()),
            appointment.service_name.as_str(),
            barber,
            display.format_currency(appointment.service_price).as_str(),
            appointment.status.label(locale).as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(format!("Failed to flush CSV writer: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| Error::Csv(format!("CSV is not valid UTF-8: {}", e)))
}

/// Build the export document for `appointments`
pub fn export_appointments(
    appointments: &[Appointment],
    barbers: &[Barber],
    display: &DisplaySettings,
    now: DateTime<Utc>,
) -> DashboardResult<CsvExport> {
    Ok(CsvExport {
        filename: export_filename(now),
        content: appointments_to_csv(appointments, barbers, display)?,
    })
}
