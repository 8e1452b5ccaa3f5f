use std::sync::Arc;

use crate::models::grid::GridConfig;
use crate::utils::date::format_hhmm;

/// One row of the time grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Zero-padded `HH:MM` wall-clock label.
    pub label: String,
    pub minutes_from_start: u32,
}

/// Build the ordered slot rows from `start_hour` up to (not including) `end_hour`.
pub fn compute_time_slots(config: &GridConfig) -> Vec<TimeSlot> {
    let step = config.slot_minutes();
    let day_offset = config.start_hour() * 60;

    (0..config.total_slots())
        .map(|index| {
            let minutes_from_start = index * step;
            TimeSlot {
                label: format_hhmm(day_offset + minutes_from_start),
                minutes_from_start,
            }
        })
        .collect()
}

/// Slot under a vertical offset measured from the top of the grid body.
pub fn slot_at_offset(y: f32, config: &GridConfig) -> Option<u32> {
    if !y.is_finite() || y < 0.0 || y >= config.grid_height_px() {
        return None;
    }
    let index = (y / config.slot_height_px()).floor() as u32;
    Some(index.min(config.total_slots() - 1) * config.slot_minutes())
}

/// Memoized slot rows, rebuilt whenever the configuration changes.
///
/// Rows are kept behind an [`Arc`] so every layout built from the same
/// configuration shares them.
#[derive(Debug)]
pub struct TimeSlotCache {
    key: Option<GridConfig>,
    slots: Arc<[TimeSlot]>,
}

impl Default for TimeSlotCache {
    fn default() -> Self {
        Self {
            key: None,
            slots: Arc::from(Vec::new()),
        }
    }
}

impl TimeSlotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&mut self, config: &GridConfig) -> &[TimeSlot] {
        self.refresh(config);
        &self.slots
    }

    /// Shared handle to the rows for `config`.
    pub fn shared(&mut self, config: &GridConfig) -> Arc<[TimeSlot]> {
        self.refresh(config);
        Arc::clone(&self.slots)
    }

    fn refresh(&mut self, config: &GridConfig) {
        if self.key.as_ref() != Some(config) {
            log::debug!(
                "Rebuilding time slots for {:02}:00-{:02}:00 every {} min",
                config.start_hour(),
                config.end_hour(),
                config.slot_minutes()
            );
            self.slots = compute_time_slots(config).into();
            self.key = Some(*config);
        }
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.slots = Arc::from(Vec::new());
    }

    pub fn is_valid_for(&self, config: &GridConfig) -> bool {
        self.key.as_ref() == Some(config)
    }
}
