// Event module
// Appointments and busy blocks placed on the agenda grid

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::status::AppointmentStatus;

/// What an agenda entry represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Appointment {
        client_name: String,
        service_name: String,
    },
    /// Time a professional is unavailable (break, blocked time).
    BusyBlock { reason: String },
}

/// A time-bounded entry on the agenda.
///
/// `start` and `end` are wall-clock times in the business time zone. The
/// layout engine never mutates these records; drag and click gestures only
/// produce intents for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub id: i64,
    pub professional_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: AppointmentStatus,
    pub kind: EventKind,
    pub color: Option<String>,
}

impl AgendaEvent {
    /// Create an appointment entry
    ///
    /// # Examples
    /// ```
    /// use salon_agenda::models::event::AgendaEvent;
    /// use salon_agenda::models::status::AppointmentStatus;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let event = AgendaEvent::appointment(
    ///     1,
    ///     7,
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(10, 0, 0).unwrap(),
    ///     AppointmentStatus::Confirmed,
    ///     "Maria",
    ///     "Haircut",
    /// );
    /// assert_eq!(event.duration_minutes(), 60.0);
    /// ```
    pub fn appointment(
        id: i64,
        professional_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: AppointmentStatus,
        client_name: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            professional_id,
            start,
            end,
            status,
            kind: EventKind::Appointment {
                client_name: client_name.into(),
                service_name: service_name.into(),
            },
            color: None,
        }
    }

    /// Create a busy block. Busy blocks always carry the `Blocked` status.
    pub fn busy_block(
        id: i64,
        professional_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id,
            professional_id,
            start,
            end,
            status: AppointmentStatus::Blocked,
            kind: EventKind::BusyBlock {
                reason: reason.into(),
            },
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_busy_block(&self) -> bool {
        matches!(self.kind, EventKind::BusyBlock { .. })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Duration in (possibly fractional, possibly negative) minutes.
    pub fn duration_minutes(&self) -> f32 {
        self.duration().num_seconds() as f32 / 60.0
    }

    /// Whether any part of the entry falls on `date`.
    pub fn touches_date(&self, date: NaiveDate) -> bool {
        let end = self.end.max(self.start);
        self.start.date() <= date && date <= end.date()
    }

    /// Whether two entries share any instant. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &AgendaEvent) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Color to paint the entry with: the explicit color, else the status color.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.status.color())
    }

    /// Primary text shown on the event card.
    pub fn title(&self) -> String {
        match &self.kind {
            EventKind::Appointment {
                client_name,
                service_name,
            } => {
                if service_name.is_empty() {
                    client_name.clone()
                } else {
                    format!("{} - {}", client_name, service_name)
                }
            }
            EventKind::BusyBlock { reason } => reason.clone(),
        }
    }

    /// Validate the entry's display metadata.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
            if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }
}
