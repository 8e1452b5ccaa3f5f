//! The agenda calendar grid.
//!
//! [`AgendaGrid`] ties the pure layout functions to the little state a grid
//! needs between frames: the memoized slot rows, the in-flight drag and the
//! current-time line. Event data always comes in from the caller as a
//! snapshot; the grid reads it and answers with geometry and intents.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::models::event::AgendaEvent;
use crate::models::grid::{GridConfig, SlotDuration};
use crate::models::settings::AgendaSettings;
use crate::models::status::AppointmentStatus;
use crate::services::drag::{DragManager, DropTarget};
use crate::services::interaction::{self, AgendaIntent, InteractionResult};
use crate::services::layout::{
    assign_lanes, column_at_x, compute_columns, compute_now_indicator_offset, slot_at_offset,
    visible_position, ColumnLayout, LaneAssignment, NowIndicator, TimeSlot, TimeSlotCache,
};
use crate::services::settings::SettingsError;
use crate::services::snapshot::AgendaSnapshot;
use crate::services::view_context::AgendaViewContext;

/// An event placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event_id: i64,
    pub professional_id: i64,
    pub column_index: usize,
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub height: f32,
    pub lane: LaneAssignment,
    pub clipped_start: bool,
    pub clipped_end: bool,
    pub title: String,
    /// `HH:MM - HH:MM` of the full event, not just its visible part.
    pub time_label: String,
    pub color: String,
    pub status: AppointmentStatus,
    pub is_busy_block: bool,
}

/// Everything needed to paint the grid for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaLayout {
    pub date: NaiveDate,
    /// Shared with the grid's slot cache.
    pub slots: Arc<[TimeSlot]>,
    pub columns: Vec<ColumnLayout>,
    pub events: Vec<PositionedEvent>,
    pub now_offset: Option<f32>,
    pub grid_height: f32,
    pub show_avatars: bool,
}

impl AgendaLayout {
    pub fn events_in_column(
        &self,
        professional_id: i64,
    ) -> impl Iterator<Item = &PositionedEvent> {
        self.events
            .iter()
            .filter(move |event| event.professional_id == professional_id)
    }

    /// Topmost event card under a point, if any.
    pub fn event_at(&self, x: f32, y: f32) -> Option<&PositionedEvent> {
        self.events.iter().rev().find(|event| {
            x >= event.left
                && x < event.left + event.width
                && y >= event.top
                && y < event.top + event.height
        })
    }
}

pub struct AgendaGrid {
    config: GridConfig,
    settings: AgendaSettings,
    tz: Tz,
    slot_cache: TimeSlotCache,
    drag: DragManager,
    now: NowIndicator,
}

impl AgendaGrid {
    /// Standard 08:00-20:00 grid using the slot size from `settings`.
    pub fn new(settings: AgendaSettings) -> Result<Self, SettingsError> {
        let config = GridConfig::with_slot(settings.slot_minutes);
        Self::with_config(config, settings)
    }

    pub fn with_config(
        mut config: GridConfig,
        settings: AgendaSettings,
    ) -> Result<Self, SettingsError> {
        let tz = settings.time_zone().map_err(SettingsError::Invalid)?;
        config.set_slot(settings.slot_minutes);
        Ok(Self {
            config,
            settings,
            tz,
            slot_cache: TimeSlotCache::new(),
            drag: DragManager::new(),
            now: NowIndicator::new(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn settings(&self) -> &AgendaSettings {
        &self.settings
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    pub fn drag(&self) -> &DragManager {
        &self.drag
    }

    pub fn set_slot_minutes(&mut self, slot: SlotDuration) {
        if self.config.slot() == slot {
            return;
        }
        log::debug!("Slot size changed to {} min", slot.minutes());
        self.settings.slot_minutes = slot;
        self.config.set_slot(slot);
        self.slot_cache.invalidate();
    }

    pub fn time_slots(&mut self) -> &[TimeSlot] {
        self.slot_cache.slots(&self.config)
    }

    /// Redraw check for the host's timer. See [`NowIndicator::refresh`].
    pub fn refresh_now(&mut self, now: NaiveDateTime) -> bool {
        self.now.refresh(now, &self.config)
    }

    /// Compute the full layout for the context's selected date.
    pub fn layout(
        &mut self,
        ctx: &AgendaViewContext,
        snapshot: &AgendaSnapshot,
        viewport_width: f32,
        now: NaiveDateTime,
    ) -> AgendaLayout {
        let date = ctx.selected_date();
        let config = self.config;
        let slots = self.slot_cache.shared(&config);

        let professionals: Vec<_> = ctx
            .visible_professionals(&snapshot.professionals)
            .into_iter()
            .cloned()
            .collect();
        let columns = compute_columns(
            &professionals,
            self.settings.column_width_mode,
            viewport_width,
        );
        let visible_events = ctx.visible_events(&snapshot.events);

        let mut events = Vec::new();
        for column in &columns {
            let placed: Vec<_> = visible_events
                .iter()
                .filter(|event| event.professional_id == column.professional_id)
                .filter_map(|event| {
                    visible_position(event, date, &config).map(|position| (*event, position))
                })
                .collect();

            let spans: Vec<(f32, f32)> = placed
                .iter()
                .map(|(_, position)| (position.top, position.bottom()))
                .collect();
            let lanes = assign_lanes(&spans);

            for ((event, position), lane) in placed.into_iter().zip(lanes) {
                let (left_fraction, width_fraction) = lane.fractions();
                events.push(PositionedEvent {
                    event_id: event.id,
                    professional_id: event.professional_id,
                    column_index: column.index,
                    left: column.left + left_fraction * column.width,
                    width: width_fraction * column.width,
                    top: position.top,
                    height: position.height,
                    lane,
                    clipped_start: position.clipped_start,
                    clipped_end: position.clipped_end,
                    title: event.title(),
                    time_label: time_label(event),
                    color: event.display_color().to_string(),
                    status: event.status,
                    is_busy_block: event.is_busy_block(),
                });
            }
        }
        events.sort_by(|a, b| {
            a.column_index
                .cmp(&b.column_index)
                .then(a.top.total_cmp(&b.top))
                .then(a.lane.lane.cmp(&b.lane.lane))
        });

        let skipped = snapshot
            .events
            .iter()
            .filter(|event| {
                !snapshot
                    .professionals
                    .iter()
                    .any(|p| p.id == event.professional_id)
            })
            .count();
        if skipped > 0 {
            log::warn!(
                "{} events reference unknown professionals and were not placed",
                skipped
            );
        }

        let now_offset = (now.date() == date)
            .then(|| compute_now_indicator_offset(now.time(), &config))
            .flatten();

        AgendaLayout {
            date,
            slots,
            columns,
            events,
            now_offset,
            grid_height: config.grid_height_px(),
            show_avatars: self.settings.show_avatars,
        }
    }

    /// Map a point in grid coordinates to a professional and slot.
    pub fn hit_test(&self, layout: &AgendaLayout, x: f32, y: f32) -> Option<DropTarget> {
        let column = column_at_x(&layout.columns, x)?;
        let slot_minutes = slot_at_offset(y, &self.config)?;
        Some(DropTarget {
            professional_id: column.professional_id,
            slot_minutes,
        })
    }

    pub fn on_event_click(&self, event: &AgendaEvent) -> InteractionResult {
        InteractionResult::single(AgendaIntent::EventClicked(event.clone()))
    }

    pub fn on_professional_click(&self, professional_id: i64) -> InteractionResult {
        InteractionResult::single(AgendaIntent::ProfessionalClicked(professional_id))
    }

    pub fn on_drag_start(&mut self, event: &AgendaEvent) {
        self.drag.on_drag_start(event);
    }

    /// Track the pointer during a drag. Returns the target under it.
    pub fn on_drag_hover(
        &mut self,
        layout: &AgendaLayout,
        x: f32,
        y: f32,
    ) -> Option<DropTarget> {
        let target = self.hit_test(layout, x, y)?;
        self.drag
            .update_hover(target.professional_id, target.slot_minutes);
        Some(target)
    }

    pub fn on_drop(
        &mut self,
        target_professional_id: i64,
        target_slot_minutes: u32,
        ctx: &AgendaViewContext,
    ) -> InteractionResult {
        let mut result = InteractionResult::default();
        if let Some(intent) = self.drag.on_drop(
            target_professional_id,
            target_slot_minutes,
            ctx.selected_date(),
            &self.config,
            self.tz,
        ) {
            result.push(intent);
        }
        result
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn on_slot_click(
        &self,
        professional_id: i64,
        slot_minutes: u32,
        ctx: &AgendaViewContext,
    ) -> InteractionResult {
        let mut result = InteractionResult::default();
        if let Some(intent) = interaction::on_slot_click(
            professional_id,
            slot_minutes,
            ctx.selected_date(),
            &self.config,
            self.tz,
            self.settings.default_status,
        ) {
            result.push(intent);
        }
        result
    }
}

fn time_label(event: &AgendaEvent) -> String {
    format!(
        "{} - {}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    )
}
