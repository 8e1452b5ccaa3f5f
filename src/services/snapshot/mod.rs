//! Backend JSON records and their conversion into agenda models.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::{AgendaEvent, EventKind};
use crate::models::professional::Professional;
use crate::models::status::{AppointmentStatus, UnknownStatus};
use crate::utils::date::parse_timestamp;

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("record {id}: invalid status")]
    Status {
        id: i64,
        #[source]
        source: UnknownStatus,
    },
    #[error("record {id}: invalid {field} timestamp '{value}'")]
    Timestamp {
        id: i64,
        field: &'static str,
        value: String,
    },
    #[error("record {id}: {message}")]
    Invalid { id: i64, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: i64,
    pub professional_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusyBlockRecord {
    pub id: i64,
    pub professional_id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Raw payload of one agenda fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotRecords {
    pub professionals: Vec<ProfessionalRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub busy_blocks: Vec<BusyBlockRecord>,
}

impl From<ProfessionalRecord> for Professional {
    fn from(record: ProfessionalRecord) -> Self {
        Professional {
            id: record.id,
            name: record.name,
            avatar_url: record.avatar_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

fn timestamp(
    id: i64,
    field: &'static str,
    value: &str,
    tz: Tz,
) -> Result<chrono::NaiveDateTime, SnapshotError> {
    parse_timestamp(value, tz).ok_or_else(|| SnapshotError::Timestamp {
        id,
        field,
        value: value.to_string(),
    })
}

fn checked(event: AgendaEvent) -> Result<AgendaEvent, SnapshotError> {
    event.validate().map_err(|message| SnapshotError::Invalid {
        id: event.id,
        message,
    })?;
    if event.end < event.start {
        log::warn!(
            "Record {} ends before it starts ({} < {})",
            event.id,
            event.end,
            event.start
        );
    }
    Ok(event)
}

impl AppointmentRecord {
    pub fn into_event(self, tz: Tz) -> Result<AgendaEvent, SnapshotError> {
        let status: AppointmentStatus = self
            .status
            .parse()
            .map_err(|source| SnapshotError::Status {
                id: self.id,
                source,
            })?;
        let start = timestamp(self.id, "start", &self.start_time, tz)?;
        let end = timestamp(self.id, "end", &self.end_time, tz)?;

        checked(AgendaEvent {
            id: self.id,
            professional_id: self.professional_id,
            start,
            end,
            status,
            kind: EventKind::Appointment {
                client_name: self.client_name,
                service_name: self.service_name,
            },
            color: self.color,
        })
    }
}

impl BusyBlockRecord {
    pub fn into_event(self, tz: Tz) -> Result<AgendaEvent, SnapshotError> {
        let start = timestamp(self.id, "start", &self.start_time, tz)?;
        let end = timestamp(self.id, "end", &self.end_time, tz)?;

        let mut event =
            AgendaEvent::busy_block(self.id, self.professional_id, start, end, self.reason);
        event.color = self.color;
        checked(event)
    }
}

/// Professionals and events for one render pass, in the business time zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgendaSnapshot {
    pub professionals: Vec<Professional>,
    pub events: Vec<AgendaEvent>,
}

impl AgendaSnapshot {
    /// Convert raw records. The first malformed record fails the whole snapshot.
    pub fn from_records(records: SnapshotRecords, tz: Tz) -> Result<Self, SnapshotError> {
        let professionals = records
            .professionals
            .into_iter()
            .map(Professional::from)
            .collect();

        let mut events =
            Vec::with_capacity(records.appointments.len() + records.busy_blocks.len());
        for record in records.appointments {
            events.push(record.into_event(tz)?);
        }
        for record in records.busy_blocks {
            events.push(record.into_event(tz)?);
        }
        events.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));

        Ok(Self {
            professionals,
            events,
        })
    }

    pub fn from_json(json: &str, tz: Tz) -> Result<Self> {
        let records: SnapshotRecords =
            serde_json::from_str(json).context("failed to parse agenda snapshot")?;
        Ok(Self::from_records(records, tz)?)
    }

    pub fn events_for(&self, professional_id: i64) -> impl Iterator<Item = &AgendaEvent> {
        self.events
            .iter()
            .filter(move |event| event.professional_id == professional_id)
    }

    pub fn find_event(&self, id: i64) -> Option<&AgendaEvent> {
        self.events.iter().find(|event| event.id == id)
    }
}

/// Load a snapshot previously saved as JSON.
pub fn load_snapshot(path: &Path, tz: Tz) -> Result<AgendaSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read agenda snapshot from {}", path.display()))?;
    AgendaSnapshot::from_json(&data, tz)
        .with_context(|| format!("failed to load agenda snapshot from {}", path.display()))
}
