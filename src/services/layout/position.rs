use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::event::AgendaEvent;
use crate::models::grid::GridConfig;

/// Vertical geometry of an event relative to the top of the grid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPosition {
    pub top: f32,
    pub height: f32,
}

/// Geometry of the part of an event that falls inside the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisiblePosition {
    pub top: f32,
    pub height: f32,
    /// The event starts before the visible window.
    pub clipped_start: bool,
    /// The event ends after the visible window.
    pub clipped_end: bool,
}

impl VisiblePosition {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

fn slots_to_px(minutes: f32, config: &GridConfig) -> f32 {
    minutes / config.slot_minutes() as f32 * config.slot_height_px()
}

/// Unclipped position from the event's start wall-clock time and duration.
///
/// Every event is at least one slot tall, which also absorbs malformed
/// records whose end precedes their start.
pub fn compute_event_position(event: &AgendaEvent, config: &GridConfig) -> EventPosition {
    let start_minutes = (event.start.hour() as i64 - config.start_hour() as i64) * 60
        + event.start.minute() as i64;
    let duration_minutes = event.duration_minutes();

    let top = slots_to_px(start_minutes as f32, config);
    let height = slots_to_px(duration_minutes, config).max(config.slot_height_px());

    EventPosition { top, height }
}

fn window_bounds(date: NaiveDate, config: &GridConfig) -> (NaiveDateTime, NaiveDateTime) {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    (
        midnight + Duration::hours(config.start_hour() as i64),
        midnight + Duration::hours(config.end_hour() as i64),
    )
}

/// Position of `event` within the visible window of `date`, or `None` when
/// no part of it is visible that day.
///
/// Events extending past either edge are clipped to the window and flagged.
/// The one-slot minimum height still applies, but never pushes a card past
/// the bottom of the grid.
pub fn visible_position(
    event: &AgendaEvent,
    date: NaiveDate,
    config: &GridConfig,
) -> Option<VisiblePosition> {
    let (window_start, window_end) = window_bounds(date, config);
    let start = event.start;
    let end = event.end.max(event.start);

    let visible = if start == end {
        window_start <= start && start < window_end
    } else {
        start < window_end && end > window_start
    };
    if !visible {
        return None;
    }

    let clipped_start = start < window_start;
    let clipped_end = end > window_end;
    let visible_start = start.max(window_start);
    let visible_end = end.min(window_end);

    let offset_minutes = (visible_start - window_start).num_seconds() as f32 / 60.0;
    let duration_minutes = (visible_end - visible_start).num_seconds() as f32 / 60.0;

    let top = slots_to_px(offset_minutes, config);
    let room = config.grid_height_px() - top;
    let height = slots_to_px(duration_minutes, config)
        .max(config.slot_height_px())
        .min(room);

    Some(VisiblePosition {
        top,
        height,
        clipped_start,
        clipped_end,
    })
}
