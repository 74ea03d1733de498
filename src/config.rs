use crate::error::{config_error, env_error, DashboardResult};
use crate::utils::theme::Theme;
use crate::utils::display::DisplaySettings;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
/// Default shop timezone
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
/// Hours added to stored timestamps before they are shown
pub const DEFAULT_DISPLAY_OFFSET_HOURS: i64 = 3;
/// Default locale for labels, dates and currency
pub const DEFAULT_LOCALE: &str = "pt-BR";
/// Default HTTP timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
/// File holding user preferences
pub const PREFERENCES_FILE: &str = "config/preferences.toml";

/// User preferences persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Stored theme, `None` when the user never toggled it
    pub theme: Option<Theme>,
}

/// Main configuration structure for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    pub api_base_url: String,
    /// Shop identifier the dashboard is mounted for
    pub barbearia_id: u64,
    /// Timezone used to compute calendar dates
    pub timezone: String,
    /// Fixed display correction in hours
    pub display_offset_hours: i64,
    /// Locale for labels, dates and currency
    pub locale: String,
    /// HTTP request timeout in seconds
    pub api_timeout_secs: u64,
    /// Directory where CSV exports are written
    pub export_dir: PathBuf,
    /// Persisted user preferences
    pub preferences: Preferences,
}

impl Config {
    /// Load configuration from environment and preferences file
    pub fn load() -> DashboardResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let barbearia_id = env::var("BARBEARIA_ID")
            .map_err(|_| env_error("BARBEARIA_ID"))?
            .parse::<u64>()
            .map_err(|_| env_error("Invalid BARBEARIA_ID format"))?;

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| String::from(DEFAULT_API_BASE_URL));
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from(DEFAULT_TIMEZONE));
        let locale = env::var("DASHBOARD_LOCALE").unwrap_or_else(|_| String::from(DEFAULT_LOCALE));

        let display_offset_hours = match env::var("DISPLAY_OFFSET_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid DISPLAY_OFFSET_HOURS format"))?,
            Err(_) => DEFAULT_DISPLAY_OFFSET_HOURS,
        };

        let api_timeout_secs = match env::var("API_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| env_error("Invalid API_TIMEOUT_SECS format"))?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        let export_dir = env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let config = Config {
            api_base_url,
            barbearia_id,
            timezone,
            display_offset_hours,
            locale,
            api_timeout_secs,
            export_dir,
            preferences: Self::load_preferences(Path::new(PREFERENCES_FILE)),
        };

        // Fail early on a bad timezone instead of at first render
        config.display_settings()?;

        Ok(config)
    }

    /// Read preferences, falling back to defaults when the file is missing or broken
    pub fn load_preferences(path: &Path) -> Preferences {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str::<Preferences>(&content).ok())
            .unwrap_or_default()
    }

    /// Store the theme preference and persist it
    pub fn set_theme(&mut self, theme: Theme) -> DashboardResult<()> {
        self.set_theme_at(theme, Path::new(PREFERENCES_FILE))
    }

    pub fn set_theme_at(&mut self, theme: Theme, path: &Path) -> DashboardResult<()> {
        self.preferences.theme = Some(theme);
        self.save_preferences(path)
    }

    /// Flip the current theme and persist the result to `path`
    pub fn toggle_theme_at(
        &mut self,
        system_prefers_dark: bool,
        path: &Path,
    ) -> DashboardResult<Theme> {
        let theme = Theme::resolve(self.preferences.theme, system_prefers_dark).toggled();
        self.set_theme_at(theme, path)?;
        Ok(theme)
    }

    /// Save preferences to the given file
    pub fn save_preferences(&self, path: &Path) -> DashboardResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_str = toml::to_string(&self.preferences)?;
        fs::write(path, toml_str)?;

        Ok(())
    }

    /// Parsed timezone
    pub fn tz(&self) -> DashboardResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }

    /// Rendering settings derived from this configuration
    pub fn display_settings(&self) -> DashboardResult<DisplaySettings> {
        Ok(DisplaySettings::new(
            self.tz()?,
            self.display_offset_hours,
            &self.locale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            barbearia_id: 7,
            timezone: "UTC".to_string(),
            display_offset_hours: 3,
            locale: "pt-BR".to_string(),
            api_timeout_secs: 5,
            export_dir: PathBuf::from("."),
            preferences: Preferences::default(),
        }
    }

    #[test]
    fn test_display_settings_rejects_unknown_timezone() {
        let mut config = test_config();
        assert!(config.display_settings().is_ok());

        config.timezone = "Mars/Olympus".to_string();
        assert!(config.display_settings().is_err());
    }

    #[test]
    fn test_preferences_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("barbearia-prefs-{}", std::process::id()));
        let path = dir.join("preferences.toml");

        let mut config = test_config();
        config.preferences.theme = Some(Theme::Dark);
        config.save_preferences(&path).unwrap();

        let loaded = Config::load_preferences(&path);
        assert_eq!(loaded.theme, Some(Theme::Dark));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_preferences_file_uses_defaults() {
        let loaded = Config::load_preferences(Path::new("/nonexistent/preferences.toml"));
        assert_eq!(loaded, Preferences::default());
    }
}
