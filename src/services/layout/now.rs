use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::models::grid::GridConfig;

/// Offset of the current-time line, or `None` outside `[start_hour, end_hour]`.
pub fn compute_now_indicator_offset(now: NaiveTime, config: &GridConfig) -> Option<f32> {
    let minutes = now.num_seconds_from_midnight() as f32 / 60.0;
    let window_start = (config.start_hour() * 60) as f32;
    let window_end = (config.end_hour() * 60) as f32;

    if minutes < window_start || minutes > window_end {
        return None;
    }

    Some((minutes - window_start) / config.slot_minutes() as f32 * config.slot_height_px())
}

/// Current-time line state for a host that redraws on a timer.
///
/// There is no push notification for the passage of time, so the host calls
/// [`NowIndicator::refresh`] from its tick and redraws when it returns `true`.
#[derive(Debug, Default)]
pub struct NowIndicator {
    last_minute: Option<NaiveDateTime>,
    last_config: Option<GridConfig>,
    offset: Option<f32>,
}

impl NowIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute when the wall-clock minute or the grid changed since the last
    /// call. Returns whether a redraw is needed.
    pub fn refresh(&mut self, now: NaiveDateTime, config: &GridConfig) -> bool {
        let minute = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);

        if self.last_minute == Some(minute) && self.last_config.as_ref() == Some(config) {
            return false;
        }

        self.last_minute = Some(minute);
        self.last_config = Some(*config);
        let offset = compute_now_indicator_offset(minute.time(), config);
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    pub fn offset(&self) -> Option<f32> {
        self.offset
    }
}
