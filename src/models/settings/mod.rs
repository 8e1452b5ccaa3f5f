// Settings module
// User-adjustable agenda display preferences

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::grid::SlotDuration;
use crate::models::status::AppointmentStatus;

pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// How professional columns share the horizontal space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidthMode {
    /// Split the viewport evenly, never narrower than the compact width.
    #[default]
    Auto,
    Compact,
    Comfortable,
}

/// Agenda preferences persisted per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaSettings {
    pub slot_minutes: SlotDuration,
    pub show_avatars: bool,
    pub column_width_mode: ColumnWidthMode,
    /// Status preselected when creating an appointment from a slot click.
    pub default_status: AppointmentStatus,
    /// IANA name of the business time zone.
    pub timezone: String,
}

impl AgendaSettings {
    pub fn validate(&self) -> Result<(), String> {
        self.time_zone().map(|_| ())
    }

    pub fn time_zone(&self) -> Result<Tz, String> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| format!("Unknown time zone '{}'", self.timezone))
    }
}

impl Default for AgendaSettings {
    fn default() -> Self {
        Self {
            slot_minutes: SlotDuration::Fifteen,
            show_avatars: true,
            column_width_mode: ColumnWidthMode::Auto,
            default_status: AppointmentStatus::Unconfirmed,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}
