// Grid module
// Visible hour range and slot granularity of the agenda time grid

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_START_HOUR: u32 = 8;
pub const DEFAULT_END_HOUR: u32 = 20;
pub const DEFAULT_SLOT_HEIGHT: f32 = 60.0;

/// Supported slot granularities. Each one divides an hour evenly, so any
/// whole-hour window splits into an integral number of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlotDuration {
    Five,
    Ten,
    #[default]
    Fifteen,
    Thirty,
    Sixty,
}

impl SlotDuration {
    pub const ALL: [SlotDuration; 5] = [
        SlotDuration::Five,
        SlotDuration::Ten,
        SlotDuration::Fifteen,
        SlotDuration::Thirty,
        SlotDuration::Sixty,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            SlotDuration::Five => 5,
            SlotDuration::Ten => 10,
            SlotDuration::Fifteen => 15,
            SlotDuration::Thirty => 30,
            SlotDuration::Sixty => 60,
        }
    }
}

impl TryFrom<u32> for SlotDuration {
    type Error = GridConfigError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        SlotDuration::ALL
            .iter()
            .copied()
            .find(|slot| slot.minutes() == minutes)
            .ok_or(GridConfigError::UnsupportedSlot(minutes))
    }
}

impl From<SlotDuration> for u32 {
    fn from(slot: SlotDuration) -> Self {
        slot.minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridConfigError {
    #[error("slot duration of {0} minutes is not supported (use 5, 10, 15, 30 or 60)")]
    UnsupportedSlot(u32),
    #[error("visible range {start}:00-{end}:00 is empty")]
    EmptyRange { start: u32, end: u32 },
    #[error("end hour {0} is past midnight")]
    EndHourOutOfRange(u32),
    #[error("slot height must be positive, got {0}")]
    InvalidSlotHeight(f32),
}

/// Geometry parameters of the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    start_hour: u32,
    end_hour: u32,
    slot: SlotDuration,
    slot_height_px: f32,
}

impl GridConfig {
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        slot: SlotDuration,
        slot_height_px: f32,
    ) -> Result<Self, GridConfigError> {
        if end_hour > 24 {
            return Err(GridConfigError::EndHourOutOfRange(end_hour));
        }
        if start_hour >= end_hour {
            return Err(GridConfigError::EmptyRange {
                start: start_hour,
                end: end_hour,
            });
        }
        if !slot_height_px.is_finite() || slot_height_px <= 0.0 {
            return Err(GridConfigError::InvalidSlotHeight(slot_height_px));
        }

        Ok(Self {
            start_hour,
            end_hour,
            slot,
            slot_height_px,
        })
    }

    /// Standard 08:00-20:00 grid with the given granularity.
    pub fn with_slot(slot: SlotDuration) -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot,
            slot_height_px: DEFAULT_SLOT_HEIGHT,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn slot(&self) -> SlotDuration {
        self.slot
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot.minutes()
    }

    pub fn slot_height_px(&self) -> f32 {
        self.slot_height_px
    }

    /// Minutes covered by the visible window.
    pub fn visible_minutes(&self) -> u32 {
        (self.end_hour - self.start_hour) * 60
    }

    pub fn total_slots(&self) -> u32 {
        self.visible_minutes() / self.slot_minutes()
    }

    /// Pixel height of the whole grid body.
    pub fn grid_height_px(&self) -> f32 {
        self.total_slots() as f32 * self.slot_height_px
    }

    /// Pixels per minute of wall-clock time.
    pub fn px_per_minute(&self) -> f32 {
        self.slot_height_px / self.slot_minutes() as f32
    }

    pub fn set_slot(&mut self, slot: SlotDuration) {
        self.slot = slot;
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::with_slot(SlotDuration::default())
    }
}
