//! In-flight drag state for rescheduling appointments on the grid.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::models::event::AgendaEvent;
use crate::models::grid::GridConfig;
use crate::services::interaction::{slot_start, AgendaIntent, DropIntent};
use crate::utils::date::localize;

/// Drop target under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub professional_id: i64,
    pub slot_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    pub event_id: i64,
    pub professional_id: i64,
    pub original_start: NaiveDateTime,
    pub duration: Duration,
    pub hovered: Option<DropTarget>,
}

impl DragContext {
    pub fn from_event(event: &AgendaEvent) -> Self {
        Self {
            event_id: event.id,
            professional_id: event.professional_id,
            original_start: event.start,
            duration: event.duration().max(Duration::zero()),
            hovered: None,
        }
    }
}

/// Holds at most one drag. Starting a new drag replaces the current one.
#[derive(Debug, Default)]
pub struct DragManager {
    active: Option<DragContext>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_drag_start(&mut self, event: &AgendaEvent) {
        if let Some(previous) = &self.active {
            log::debug!(
                "Drag of event {} replaced by event {}",
                previous.event_id,
                event.id
            );
        }
        self.active = Some(DragContext::from_event(event));
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn update_hover(&mut self, professional_id: i64, slot_minutes: u32) {
        if let Some(state) = self.active.as_mut() {
            state.hovered = Some(DropTarget {
                professional_id,
                slot_minutes,
            });
        }
    }

    /// Finish the drag onto slot `target_slot_minutes` of a professional's column on `date`.
    ///
    /// The drag state is cleared whether or not a drag was active. Overlaps
    /// and working hours are left for the backend to validate.
    pub fn on_drop(
        &mut self,
        target_professional_id: i64,
        target_slot_minutes: u32,
        date: NaiveDate,
        config: &GridConfig,
        tz: Tz,
    ) -> Option<AgendaIntent> {
        let state = self.active.take()?;
        let Some(new_start) = slot_start(date, config, target_slot_minutes) else {
            log::warn!(
                "Drop target {} min after opening on {} is out of range",
                target_slot_minutes,
                date
            );
            return None;
        };
        let new_start = localize(new_start, tz);

        log::debug!(
            "Dropped event {} on professional {} at {}",
            state.event_id,
            target_professional_id,
            new_start.naive_local()
        );

        Some(AgendaIntent::AppointmentDropped(DropIntent {
            appointment_id: state.event_id,
            new_start,
            new_professional_id: target_professional_id,
            previous_start: state.original_start,
            previous_professional_id: state.professional_id,
            duration: state.duration,
        }))
    }

    /// Drop onto the last hovered target, if any.
    pub fn drop_on_hovered(
        &mut self,
        date: NaiveDate,
        config: &GridConfig,
        tz: Tz,
    ) -> Option<AgendaIntent> {
        let target = self.active.as_ref().and_then(|state| state.hovered);
        match target {
            Some(target) => {
                self.on_drop(target.professional_id, target.slot_minutes, date, config, tz)
            }
            None => {
                self.cancel();
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(state) = self.active.take() {
            log::debug!("Drag of event {} cancelled", state.event_id);
        }
    }
}
