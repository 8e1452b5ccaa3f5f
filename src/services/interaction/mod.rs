//! Intents emitted by the agenda grid.
//!
//! The grid never writes to the backend. Gestures are turned into intents,
//! collected in an [`InteractionResult`] and handed to the host through the
//! [`AgendaHost`] callbacks.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat};
use chrono_tz::Tz;

use crate::models::event::AgendaEvent;
use crate::models::grid::GridConfig;
use crate::models::status::AppointmentStatus;
use crate::utils::date::localize;

/// Request to move an appointment to a new start time and/or professional.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIntent {
    pub appointment_id: i64,
    pub new_start: DateTime<Tz>,
    pub new_professional_id: i64,
    pub previous_start: NaiveDateTime,
    pub previous_professional_id: i64,
    pub duration: Duration,
}

impl DropIntent {
    pub fn new_start_iso(&self) -> String {
        self.new_start.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    pub fn new_end(&self) -> DateTime<Tz> {
        self.new_start + self.duration
    }

    /// Whether the drop leaves the appointment where it was.
    pub fn is_noop(&self) -> bool {
        self.new_start.naive_local() == self.previous_start
            && self.new_professional_id == self.previous_professional_id
    }
}

/// Request to open the appointment form prefilled for a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIntent {
    pub professional_id: i64,
    pub start: DateTime<Tz>,
    pub default_status: AppointmentStatus,
}

impl CreateIntent {
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AgendaIntent {
    EventClicked(AgendaEvent),
    ProfessionalClicked(i64),
    AppointmentDropped(DropIntent),
    CreateAppointment(CreateIntent),
}

/// Callbacks the hosting page provides to the grid.
#[cfg_attr(test, mockall::automock)]
pub trait AgendaHost {
    fn on_event_click(&mut self, event: &AgendaEvent);
    fn on_professional_click(&mut self, professional_id: i64);
    fn on_appointment_drop(
        &mut self,
        appointment_id: i64,
        new_start_time_iso: &str,
        new_professional_id: i64,
    );
    fn on_create_appointment(&mut self, professional_id: i64, start_time_iso: &str);
}

/// Intents produced while handling one batch of gestures.
#[derive(Debug, Default)]
pub struct InteractionResult {
    pub intents: Vec<AgendaIntent>,
}

impl InteractionResult {
    pub fn single(intent: AgendaIntent) -> Self {
        Self {
            intents: vec![intent],
        }
    }

    pub fn push(&mut self, intent: AgendaIntent) {
        self.intents.push(intent);
    }

    pub fn merge(&mut self, other: InteractionResult) {
        self.intents.extend(other.intents);
    }

    pub fn has_actions(&self) -> bool {
        !self.intents.is_empty()
    }

    pub fn drops(&self) -> impl Iterator<Item = &DropIntent> {
        self.intents.iter().filter_map(|intent| match intent {
            AgendaIntent::AppointmentDropped(drop) => Some(drop),
            _ => None,
        })
    }

    /// Forward every intent, in order, to the host callbacks.
    ///
    /// Drops onto the event's current slot are forwarded too; hosts that want
    /// to skip them can check [`DropIntent::is_noop`] before dispatching.
    pub fn dispatch(self, host: &mut dyn AgendaHost) {
        for intent in self.intents {
            match intent {
                AgendaIntent::EventClicked(event) => host.on_event_click(&event),
                AgendaIntent::ProfessionalClicked(id) => host.on_professional_click(id),
                AgendaIntent::AppointmentDropped(drop) => {
                    host.on_appointment_drop(
                        drop.appointment_id,
                        &drop.new_start_iso(),
                        drop.new_professional_id,
                    );
                }
                AgendaIntent::CreateAppointment(create) => {
                    host.on_create_appointment(create.professional_id, &create.start_iso())
                }
            }
        }
    }
}

/// Wall-clock start of the slot `slot_minutes` after `start_hour` on `date`,
/// or `None` past the end of the representable calendar.
pub fn slot_start(
    date: NaiveDate,
    config: &GridConfig,
    slot_minutes: u32,
) -> Option<NaiveDateTime> {
    let offset =
        Duration::hours(config.start_hour() as i64) + Duration::minutes(slot_minutes as i64);
    date.and_time(chrono::NaiveTime::MIN).checked_add_signed(offset)
}

/// Create intent for a click on an empty slot. No server call is made.
pub fn on_slot_click(
    professional_id: i64,
    slot_minutes: u32,
    date: NaiveDate,
    config: &GridConfig,
    tz: Tz,
    default_status: AppointmentStatus,
) -> Option<AgendaIntent> {
    let Some(start) = slot_start(date, config, slot_minutes) else {
        log::warn!("Slot {} min after opening on {} is out of range", slot_minutes, date);
        return None;
    };
    let start = localize(start, tz);
    log::debug!(
        "Slot click: professional {} at {}",
        professional_id,
        start.naive_local()
    );
    Some(AgendaIntent::CreateAppointment(CreateIntent {
        professional_id,
        start,
        default_status,
    }))
}
