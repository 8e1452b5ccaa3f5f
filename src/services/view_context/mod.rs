//! Page-scoped agenda view state.
//!
//! The agenda page owns one [`AgendaViewContext`] and lends it by reference
//! to the components that need it. All mutation goes through the setters
//! below, each of which bumps [`AgendaViewContext::revision`] so callers can
//! tell when derived data must be recomputed.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::event::AgendaEvent;
use crate::models::professional::Professional;
use crate::models::status::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaViewContext {
    selected_date: NaiveDate,
    /// `None` shows every professional.
    professional_filter: Option<BTreeSet<i64>>,
    visible_statuses: BTreeSet<AppointmentStatus>,
    revision: u64,
}

impl AgendaViewContext {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            professional_filter: None,
            visible_statuses: AppointmentStatus::ALL.into_iter().collect(),
            revision: 0,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn visible_statuses(&self) -> &BTreeSet<AppointmentStatus> {
        &self.visible_statuses
    }

    pub fn professional_filter(&self) -> Option<&BTreeSet<i64>> {
        self.professional_filter.as_ref()
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        if self.selected_date != date {
            self.selected_date = date;
            self.touch();
        }
    }

    /// Move to the following day. Stays put at the end of the calendar.
    pub fn next_day(&mut self) {
        if let Some(date) = self.selected_date.succ_opt() {
            self.set_selected_date(date);
        }
    }

    pub fn previous_day(&mut self) {
        if let Some(date) = self.selected_date.pred_opt() {
            self.set_selected_date(date);
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.set_selected_date(today);
    }

    /// Show or hide one status. Returns whether it is now visible.
    pub fn toggle_status(&mut self, status: AppointmentStatus) -> bool {
        let visible = if self.visible_statuses.remove(&status) {
            false
        } else {
            self.visible_statuses.insert(status);
            true
        };
        self.touch();
        visible
    }

    pub fn set_professional_filter<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.professional_filter = Some(ids.into_iter().collect());
        self.touch();
    }

    pub fn clear_filters(&mut self) {
        self.professional_filter = None;
        self.visible_statuses = AppointmentStatus::ALL.into_iter().collect();
        self.touch();
    }

    pub fn shows_professional(&self, id: i64) -> bool {
        self.professional_filter
            .as_ref()
            .map_or(true, |ids| ids.contains(&id))
    }

    pub fn visible_professionals<'a>(
        &self,
        professionals: &'a [Professional],
    ) -> Vec<&'a Professional> {
        professionals
            .iter()
            .filter(|professional| self.shows_professional(professional.id))
            .collect()
    }

    /// Events of visible professionals and statuses that touch the selected date.
    pub fn visible_events<'a>(&self, events: &'a [AgendaEvent]) -> Vec<&'a AgendaEvent> {
        events
            .iter()
            .filter(|event| self.visible_statuses.contains(&event.status))
            .filter(|event| self.shows_professional(event.professional_id))
            .filter(|event| event.touches_date(self.selected_date))
            .collect()
    }
}
