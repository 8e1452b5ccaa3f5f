mod service;

pub use service::{SettingsError, SettingsStore, CONFIG_ENV_VAR};
