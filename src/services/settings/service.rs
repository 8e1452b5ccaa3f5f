use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::AgendaSettings;

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV_VAR: &str = "SALON_AGENDA_CONFIG";

const SETTINGS_FILE: &str = "agenda.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// TOML-backed store for [`AgendaSettings`].
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$SALON_AGENDA_CONFIG`, else in the platform config directory.
    pub fn from_env() -> Self {
        Self::new(Self::resolve_path())
    }

    pub fn resolve_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        if let Some(dirs) = ProjectDirs::from("com", "SalonAgenda", "Agenda") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<AgendaSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(AgendaSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: AgendaSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &AgendaSettings) -> Result<()> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        log::info!("Saved agenda settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<AgendaSettings> {
        let defaults = AgendaSettings::default();
        self.save(&defaults)?;
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::SlotDuration;
    use crate::models::settings::ColumnWidthMode;
    use crate::models::status::AppointmentStatus;
    use serial_test::serial;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, store)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, store) = setup_store();
        assert_eq!(store.load().unwrap(), AgendaSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, store) = setup_store();
        let settings = AgendaSettings {
            slot_minutes: SlotDuration::Ten,
            show_avatars: false,
            column_width_mode: ColumnWidthMode::Comfortable,
            default_status: AppointmentStatus::Confirmed,
            timezone: "Europe/Lisbon".to_string(),
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("slot_minutes = 10"));
        assert!(raw.contains("default_status = \"confirmed\""));
    }

    #[test]
    fn test_save_rejects_invalid_timezone() {
        let (_dir, store) = setup_store();
        let settings = AgendaSettings {
            timezone: "Nowhere/Special".to_string(),
            ..AgendaSettings::default()
        };
        let err = store.save(&settings).unwrap_err();
        assert!(err.to_string().contains("Unknown time zone"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_rejects_unsupported_slot() {
        let (_dir, store) = setup_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "slot_minutes = 20\n").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_reset() {
        let (_dir, store) = setup_store();
        let mut settings = AgendaSettings::default();
        settings.slot_minutes = SlotDuration::Sixty;
        store.save(&settings).unwrap();

        let reset = store.reset().unwrap();
        assert_eq!(reset, AgendaSettings::default());
        assert_eq!(store.load().unwrap(), AgendaSettings::default());
    }

    #[test]
    #[serial]
    fn test_env_override() {
        let (dir, _) = setup_store();
        let custom = dir.path().join("custom.toml");
        std::env::set_var(CONFIG_ENV_VAR, &custom);
        assert_eq!(SettingsStore::from_env().path(), custom.as_path());
        std::env::remove_var(CONFIG_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_default_path_uses_settings_file_name() {
        std::env::remove_var(CONFIG_ENV_VAR);
        let path = SettingsStore::resolve_path();
        assert_eq!(path.file_name().unwrap(), SETTINGS_FILE);
    }
}
