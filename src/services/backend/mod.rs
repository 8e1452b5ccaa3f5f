//! Boundary to the scheduling backend.
//!
//! The REST client lives outside this crate. [`AppointmentBackend`] models
//! the operations the agenda page needs from it, and [`IntentForwarder`]
//! turns grid intents into those calls.

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::event::AgendaEvent;
use crate::models::status::AppointmentStatus;
use crate::services::interaction::AgendaHost;
use crate::services::snapshot::AppointmentRecord;

/// Payload for creating an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub professional_id: i64,
    pub start_time: String,
    pub status: AppointmentStatus,
    pub client_id: Option<i64>,
    pub service_id: Option<i64>,
}

/// Partial update of an appointment. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

#[cfg_attr(test, mockall::automock)]
pub trait AppointmentBackend {
    fn list(&self, date: NaiveDate) -> Result<Vec<AppointmentRecord>>;
    fn create(&self, appointment: &NewAppointment) -> Result<AppointmentRecord>;
    fn update(&self, id: i64, update: &AppointmentUpdate) -> Result<AppointmentRecord>;
    fn cancel(&self, id: i64, reason: &str) -> Result<()>;
}

/// Slot the user clicked, waiting for the host's appointment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCreate {
    pub professional_id: i64,
    pub start_time_iso: String,
    /// Preselected in the form; the user may change it before submitting.
    pub status: AppointmentStatus,
}

/// [`AgendaHost`] that forwards reschedules to the backend.
///
/// Create intents are kept as a pending draft for the form, clicks are
/// remembered as the current selection, and backend failures are stored for
/// the page to report instead of aborting the interaction.
pub struct IntentForwarder<B: AppointmentBackend> {
    backend: B,
    updated: Vec<AppointmentRecord>,
    pending_create: Option<PendingCreate>,
    default_status: AppointmentStatus,
    selected_event: Option<i64>,
    selected_professional: Option<i64>,
    last_error: Option<String>,
}

impl<B: AppointmentBackend> IntentForwarder<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            updated: Vec::new(),
            pending_create: None,
            default_status: AppointmentStatus::default(),
            selected_event: None,
            selected_professional: None,
            last_error: None,
        }
    }

    /// Status preselected for appointments created from slot clicks,
    /// normally `AgendaSettings::default_status`.
    pub fn with_default_status(mut self, status: AppointmentStatus) -> Self {
        self.default_status = status;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Records returned by successful updates since the last call.
    pub fn take_updated(&mut self) -> Vec<AppointmentRecord> {
        std::mem::take(&mut self.updated)
    }

    pub fn take_pending_create(&mut self) -> Option<PendingCreate> {
        self.pending_create.take()
    }

    /// Draft being edited by the form.
    pub fn pending_create_mut(&mut self) -> Option<&mut PendingCreate> {
        self.pending_create.as_mut()
    }

    pub fn selected_event(&self) -> Option<i64> {
        self.selected_event
    }

    pub fn selected_professional(&self) -> Option<i64> {
        self.selected_professional
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit the pending create draft with the details collected by the form.
    pub fn submit_pending_create(
        &mut self,
        client_id: Option<i64>,
        service_id: Option<i64>,
    ) -> Option<AppointmentRecord> {
        let draft = self.pending_create.take()?;
        let request = NewAppointment {
            professional_id: draft.professional_id,
            start_time: draft.start_time_iso.clone(),
            status: draft.status,
            client_id,
            service_id,
        };

        match self.backend.create(&request) {
            Ok(record) => {
                self.last_error = None;
                Some(record)
            }
            Err(err) => {
                log::error!("Failed to create appointment: {err:?}");
                self.last_error = Some(format!("{err:#}"));
                self.pending_create = Some(draft);
                None
            }
        }
    }

    /// Fetch the appointments of `date` for the next render pass.
    ///
    /// Returns `None` when the fetch or the conversion fails; the error is kept
    /// in [`IntentForwarder::last_error`] and the page falls back to an empty state.
    pub fn fetch_day(&mut self, date: NaiveDate, tz: Tz) -> Option<Vec<AgendaEvent>> {
        let fetched = self.backend.list(date).and_then(|records| {
            records
                .into_iter()
                .map(|record| record.into_event(tz).map_err(anyhow::Error::from))
                .collect::<Result<Vec<_>>>()
        });

        match fetched {
            Ok(events) => {
                log::debug!("Fetched {} appointments for {}", events.len(), date);
                self.last_error = None;
                Some(events)
            }
            Err(err) => {
                log::error!("Failed to load appointments for {date}: {err:?}");
                self.last_error = Some(format!("{err:#}"));
                None
            }
        }
    }

    /// Cancel an appointment, keeping the reason the user typed.
    pub fn cancel(&mut self, id: i64, reason: &str) -> bool {
        match self.backend.cancel(id, reason) {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                log::error!("Failed to cancel appointment {id}: {err:?}");
                self.last_error = Some(format!("{err:#}"));
                false
            }
        }
    }
}

impl<B: AppointmentBackend> AgendaHost for IntentForwarder<B> {
    fn on_event_click(&mut self, event: &AgendaEvent) {
        self.selected_event = Some(event.id);
    }

    fn on_professional_click(&mut self, professional_id: i64) {
        self.selected_professional = Some(professional_id);
    }

    fn on_appointment_drop(
        &mut self,
        appointment_id: i64,
        new_start_time_iso: &str,
        new_professional_id: i64,
    ) {
        let update = AppointmentUpdate {
            professional_id: Some(new_professional_id),
            start_time: Some(new_start_time_iso.to_string()),
            status: None,
        };

        match self.backend.update(appointment_id, &update) {
            Ok(record) => {
                log::info!(
                    "Moved appointment {} to professional {} at {}",
                    appointment_id,
                    new_professional_id,
                    new_start_time_iso
                );
                self.last_error = None;
                self.updated.push(record);
            }
            Err(err) => {
                log::error!("Failed to move appointment {appointment_id}: {err:?}");
                self.last_error = Some(format!("{err:#}"));
            }
        }
    }

    fn on_create_appointment(&mut self, professional_id: i64, start_time_iso: &str) {
        self.pending_create = Some(PendingCreate {
            professional_id,
            start_time_iso: start_time_iso.to_string(),
            status: self.default_status,
        });
    }
}
