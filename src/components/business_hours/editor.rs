use super::schedule::{complete_week, default_week, open_days_payload, validate_week};
use crate::api::BarbeariaApi;
use crate::error::{validation_error, DashboardResult};
use crate::models::{BusinessHoursPayload, DayOfWeek, WeeklyScheduleEntry};
use chrono::{DateTime, Duration, Utc};
use rust_i18n::t;
use tracing::{error, info, warn};

/// How long the save confirmation stays visible
pub const SUCCESS_NOTICE_SECS: i64 = 3;

/// Message that disappears at `expires_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: String, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message,
            expires_at: shown_at + ttl,
        }
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Form state of the weekly business-hours editor
#[derive(Debug, Clone)]
pub struct BusinessHoursEditor {
    barbearia_id: u64,
    locale: String,
    entries: Vec<WeeklyScheduleEntry>,
    is_loading: bool,
    is_saving: bool,
    error: Option<String>,
    success: Option<Notice>,
}

impl BusinessHoursEditor {
    /// Editor waiting for its first load, showing the default week
    pub fn new(barbearia_id: u64, locale: &str) -> Self {
        Self {
            barbearia_id,
            locale: locale.to_string(),
            entries: default_week(),
            is_loading: true,
            is_saving: false,
            error: None,
            success: None,
        }
    }

    /// Editor seeded with a schedule supplied by the caller
    pub fn with_schedule(barbearia_id: u64, locale: &str, schedule: &[WeeklyScheduleEntry]) -> Self {
        Self {
            entries: complete_week(schedule),
            is_loading: false,
            ..Self::new(barbearia_id, locale)
        }
    }

    /// Use `existing` when given, otherwise load from the backend
    pub async fn initialize(
        barbearia_id: u64,
        locale: &str,
        existing: Option<&[WeeklyScheduleEntry]>,
        api: &dyn BarbeariaApi,
    ) -> Self {
        match existing {
            Some(schedule) => Self::with_schedule(barbearia_id, locale, schedule),
            None => {
                let mut editor = Self::new(barbearia_id, locale);
                editor.load(api).await;
                editor
            }
        }
    }

    /// Fetch the stored week, falling back to the default week on failure
    pub async fn load(&mut self, api: &dyn BarbeariaApi) {
        self.is_loading = true;

        match api.get_business_hours(self.barbearia_id).await {
            Ok(entries) if !entries.is_empty() => {
                info!(
                    "Loaded {} business-hours entries for shop {}",
                    entries.len(),
                    self.barbearia_id
                );
                self.entries = complete_week(&entries);
                self.error = None;
            }
            Ok(_) => {
                info!("Shop {} has no business hours yet, using defaults", self.barbearia_id);
                self.entries = default_week();
                self.error = None;
            }
            Err(e) => {
                error!("Failed to load business hours for shop {}: {}", self.barbearia_id, e);
                self.entries = default_week();
                self.error = Some(t!("hours_load_failed", locale = &self.locale).to_string());
            }
        }

        self.is_loading = false;
    }

    pub fn barbearia_id(&self) -> u64 {
        self.barbearia_id
    }

    pub fn entries(&self) -> &[WeeklyScheduleEntry] {
        &self.entries
    }

    pub fn entry(&self, day: DayOfWeek) -> Option<&WeeklyScheduleEntry> {
        self.entries.iter().find(|entry| entry.day_of_week == day)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a save is in flight; the save control should be disabled
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Save confirmation, if it has not expired yet
    pub fn success_message(&self, now: DateTime<Utc>) -> Option<&str> {
        self.success
            .as_ref()
            .filter(|notice| notice.is_visible(now))
            .map(|notice| notice.message.as_str())
    }

    fn entry_mut(&mut self, day: DayOfWeek) -> Option<&mut WeeklyScheduleEntry> {
        self.error = None;
        self.success = None;
        self.entries.iter_mut().find(|entry| entry.day_of_week == day)
    }

    /// Open or close a day; its times are kept
    pub fn set_open(&mut self, day: DayOfWeek, is_open: bool) {
        if let Some(entry) = self.entry_mut(day) {
            entry.is_open = is_open;
        }
    }

    /// Change the opening time; ignored for closed days
    pub fn set_start_time(&mut self, day: DayOfWeek, time: &str) -> bool {
        match self.entry_mut(day) {
            Some(entry) if entry.is_open => {
                entry.start_time = time.to_string();
                true
            }
            _ => false,
        }
    }

    /// Change the closing time; ignored for closed days
    pub fn set_end_time(&mut self, day: DayOfWeek, time: &str) -> bool {
        match self.entry_mut(day) {
            Some(entry) if entry.is_open => {
                entry.end_time = time.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_week(&self.entries, &self.locale)
    }

    /// Validate and mark the editor as saving; returns what must be submitted
    pub fn begin_save(&mut self) -> DashboardResult<Vec<BusinessHoursPayload>> {
        if self.is_saving {
            warn!("Business hours save already in progress for shop {}", self.barbearia_id);
            return Err(validation_error(
                &t!("hours_save_in_progress", locale = &self.locale),
            ));
        }

        if let Err(message) = self.validate() {
            self.error = Some(message.clone());
            return Err(validation_error(&message));
        }

        self.is_saving = true;
        self.error = None;
        Ok(open_days_payload(self.barbearia_id, &self.entries))
    }

    /// Record the outcome of a submission started with `begin_save`
    pub fn finish_save(&mut self, result: &DashboardResult<()>, now: DateTime<Utc>) {
        self.is_saving = false;

        match result {
            Ok(()) => {
                info!("Saved business hours for shop {}", self.barbearia_id);
                self.success = Some(Notice::new(
                    t!("hours_saved", locale = &self.locale).to_string(),
                    now,
                    Duration::seconds(SUCCESS_NOTICE_SECS),
                ));
            }
            Err(e) => {
                error!("Failed to save business hours for shop {}: {}", self.barbearia_id, e);
                self.error = Some(
                    t!("hours_save_failed", locale = &self.locale, error = e.to_string())
                        .to_string(),
                );
            }
        }
    }

    /// Validate and submit the open days
    pub async fn save(&mut self, api: &dyn BarbeariaApi, now: DateTime<Utc>) -> DashboardResult<()> {
        let payload = self.begin_save()?;
        let result = api.update_business_hours(self.barbearia_id, &payload).await;
        self.finish_save(&result, now);
        result
    }

    /// Discard edits and go back to the default week
    pub fn reset(&mut self) {
        self.entries = default_week();
        self.error = None;
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_notice_expires_after_ttl() {
        let shown = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let notice = Notice::new("ok".to_string(), shown, Duration::seconds(3));
        assert!(notice.is_visible(shown + Duration::seconds(2)));
        assert!(!notice.is_visible(shown + Duration::seconds(3)));
    }

    #[test]
    fn test_toggle_keeps_times() {
        let mut editor = BusinessHoursEditor::with_schedule(1, "pt-BR", &default_week());
        assert!(editor.set_start_time(DayOfWeek::Monday, "07:30"));

        editor.set_open(DayOfWeek::Monday, false);
        editor.set_open(DayOfWeek::Monday, true);

        assert_eq!(editor.entry(DayOfWeek::Monday).unwrap().start_time, "07:30");
    }

    #[test]
    fn test_time_edits_ignored_on_closed_days() {
        let mut editor = BusinessHoursEditor::with_schedule(1, "pt-BR", &default_week());
        assert!(!editor.set_end_time(DayOfWeek::Sunday, "12:00"));
        assert_eq!(editor.entry(DayOfWeek::Sunday).unwrap().end_time, "18:00");
    }

    #[test]
    fn test_begin_save_blocks_second_submission() {
        let mut editor = BusinessHoursEditor::with_schedule(1, "pt-BR", &default_week());
        let payload = editor.begin_save().unwrap();
        assert_eq!(payload.len(), 6);
        assert!(editor.is_saving());

        assert!(editor.begin_save().is_err());

        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        editor.finish_save(&Ok(()), now);
        assert!(!editor.is_saving());
        assert_eq!(editor.success_message(now), Some("Horários salvos com sucesso!"));
        assert_eq!(editor.success_message(now + Duration::seconds(3)), None);
    }

    #[test]
    fn test_invalid_week_is_not_submitted() {
        let mut editor = BusinessHoursEditor::with_schedule(1, "pt-BR", &default_week());
        editor.set_end_time(DayOfWeek::Tuesday, "08:00");

        assert!(editor.begin_save().is_err());
        assert!(!editor.is_saving());
        assert!(editor.error().is_some());
    }

    #[test]
    fn test_edit_clears_messages() {
        let mut editor = BusinessHoursEditor::with_schedule(1, "pt-BR", &default_week());
        editor.set_end_time(DayOfWeek::Tuesday, "08:00");
        let _ = editor.begin_save();
        assert!(editor.error().is_some());

        editor.set_end_time(DayOfWeek::Tuesday, "18:00");
        assert!(editor.error().is_none());
    }
}
