use super::fields::{draft_from, ProfileField};
use crate::api::BarbeariaApi;
use crate::error::{component_error, DashboardResult};
use crate::models::{Barbershop, BarbershopUpdate};
use rust_i18n::t;
use tracing::{error, info};

/// Profile view with an optional edit draft.
///
/// Saving replaces the stored profile with the backend's answer; a failed
/// save keeps the draft so the user can retry.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    current: Barbershop,
    draft: BarbershopUpdate,
    is_editing: bool,
    is_saving: bool,
    error: Option<String>,
    locale: String,
}

impl ProfileEditor {
    pub fn new(current: Barbershop, locale: &str) -> Self {
        Self {
            draft: draft_from(&current),
            current,
            is_editing: false,
            is_saving: false,
            error: None,
            locale: locale.to_string(),
        }
    }

    pub fn current(&self) -> &Barbershop {
        &self.current
    }

    pub fn draft(&self) -> &BarbershopUpdate {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Field labels and the values to render, in form order
    pub fn rows(&self) -> Vec<(ProfileField, String, String)> {
        ProfileField::ALL
            .into_iter()
            .map(|field| {
                let value = if self.is_editing {
                    field.value(&self.draft).to_string()
                } else {
                    field.get(&self.current)
                };
                (field, field.label(&self.locale), value)
            })
            .collect()
    }

    pub fn start_editing(&mut self) {
        self.draft = draft_from(&self.current);
        self.is_editing = true;
        self.error = None;
    }

    pub fn edit(&mut self, field: ProfileField, value: &str) {
        field.set(&mut self.draft, value);
    }

    /// Drop the draft and leave edit mode
    pub fn cancel(&mut self) {
        self.draft = draft_from(&self.current);
        self.is_editing = false;
        self.error = None;
    }

    pub async fn save(&mut self, api: &dyn BarbeariaApi) -> DashboardResult<&Barbershop> {
        if self.is_saving {
            return Err(component_error("Profile save already in progress"));
        }

        self.is_saving = true;
        let result = api.update_barbershop(self.current.id, &self.draft).await;
        self.is_saving = false;

        match result {
            Ok(updated) => {
                info!("Updated profile of shop {}", updated.id);
                self.draft = draft_from(&updated);
                self.current = updated;
                self.is_editing = false;
                self.error = None;
                Ok(&self.current)
            }
            Err(e) => {
                error!("Failed to update profile of shop {}: {}", self.current.id, e);
                self.error = Some(
                    t!("profile_save_failed", locale = &self.locale, error = e.to_string())
                        .to_string(),
                );
                Err(e)
            }
        }
    }
}
