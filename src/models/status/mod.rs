// Status module
// Closed set of appointment statuses with their labels and colors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of an agenda entry as reported by the backend.
///
/// Every variant carries its wire key, display label and color, so an
/// unrecognized status is rejected when the record is built instead of
/// falling back to a default color at render time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum AppointmentStatus {
    Confirmed,
    #[default]
    Unconfirmed,
    Waiting,
    Cancelled,
    Billed,
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appointment status '{0}'")]
pub struct UnknownStatus(pub String);

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Unconfirmed,
        AppointmentStatus::Waiting,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Billed,
        AppointmentStatus::Blocked,
    ];

    /// Key used by the backend API.
    pub fn key(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Unconfirmed => "unconfirmed",
            AppointmentStatus::Waiting => "waiting",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Billed => "billed",
            AppointmentStatus::Blocked => "blocked",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Unconfirmed => "Unconfirmed",
            AppointmentStatus::Waiting => "Waiting",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Billed => "Billed",
            AppointmentStatus::Blocked => "Blocked",
        }
    }

    /// Hex color used for the event card background.
    pub fn color(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "#22C55E",
            AppointmentStatus::Unconfirmed => "#F59E0B",
            AppointmentStatus::Waiting => "#3B82F6",
            AppointmentStatus::Cancelled => "#EF4444",
            AppointmentStatus::Billed => "#8B5CF6",
            AppointmentStatus::Blocked => "#6B7280",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        AppointmentStatus::ALL
            .iter()
            .copied()
            .find(|status| status.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for AppointmentStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.key().parse::<AppointmentStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            " CONFIRMED ".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::Confirmed)
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "no_show".parse::<AppointmentStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("no_show".to_string()));
        assert_eq!(err.to_string(), "unknown appointment status 'no_show'");
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&AppointmentStatus::Waiting).unwrap();
        assert_eq!(json, "\"waiting\"");

        let parsed: AppointmentStatus = serde_json::from_str("\"billed\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Billed);

        assert!(serde_json::from_str::<AppointmentStatus>("\"pending\"").is_err());
    }
}
