//! Pure geometry for the agenda time grid.
//!
//! Everything here is a function of the grid configuration and a snapshot of
//! the data: time slot rows, event rectangles, professional columns, overlap
//! lanes and the current-time indicator. Nothing in this module performs I/O
//! or mutates the events it is given.

mod columns;
mod lanes;
mod now;
mod position;
mod slots;

pub use columns::{
    column_at_x, column_width, compute_columns, ColumnLayout, COLUMN_SPACING,
    COMFORTABLE_COLUMN_WIDTH, COMPACT_COLUMN_WIDTH, TIME_LABEL_WIDTH,
};
pub use lanes::{assign_lanes, LaneAssignment};
pub use now::{compute_now_indicator_offset, NowIndicator};
pub use position::{compute_event_position, visible_position, EventPosition, VisiblePosition};
pub use slots::{compute_time_slots, slot_at_offset, TimeSlot, TimeSlotCache};
