// Property-based tests for the agenda grid layout
// Checks geometry and drop math against random slot sizes and events

use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::America::Sao_Paulo;
use proptest::prelude::*;

use salon_agenda::models::event::AgendaEvent;
use salon_agenda::models::grid::{GridConfig, SlotDuration};
use salon_agenda::models::professional::Professional;
use salon_agenda::models::settings::AgendaSettings;
use salon_agenda::models::status::AppointmentStatus;
use salon_agenda::services::drag::DragManager;
use salon_agenda::services::grid::AgendaGrid;
use salon_agenda::services::interaction::AgendaIntent;
use salon_agenda::services::layout::{assign_lanes, compute_event_position, compute_time_slots};
use salon_agenda::services::snapshot::AgendaSnapshot;
use salon_agenda::services::view_context::AgendaViewContext;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Wall-clock time `minutes` after the grid opens at 08:00.
fn grid_time(minutes: u32) -> NaiveDateTime {
    day().and_hms_opt(8, 0, 0).unwrap() + Duration::minutes(minutes as i64)
}

fn any_slot() -> impl Strategy<Value = SlotDuration> {
    prop::sample::select(SlotDuration::ALL.to_vec())
}

fn appointment(id: i64, professional_id: i64, start: u32, duration: u32) -> AgendaEvent {
    AgendaEvent::appointment(
        id,
        professional_id,
        grid_time(start),
        grid_time(start + duration),
        AppointmentStatus::Confirmed,
        "Client",
        "Service",
    )
}

proptest! {
    /// Property: slot rows cover the whole window in strictly increasing steps
    #[test]
    fn prop_slots_cover_window(slot in any_slot()) {
        let config = GridConfig::with_slot(slot);
        let slots = compute_time_slots(&config);

        prop_assert_eq!(slots.len() as u32, 12 * 60 / slot.minutes());
        prop_assert_eq!(slots[0].label.as_str(), "08:00");
        for pair in slots.windows(2) {
            prop_assert_eq!(
                pair[1].minutes_from_start - pair[0].minutes_from_start,
                slot.minutes()
            );
        }
    }

    /// Property: events at least one slot long are exactly proportional in height
    #[test]
    fn prop_height_proportional_to_duration(
        slot in any_slot(),
        start in 0u32..600,
        extra in 0u32..240,
    ) {
        let config = GridConfig::with_slot(slot);
        let duration = slot.minutes() + extra;
        let position = compute_event_position(&appointment(1, 1, start, duration), &config);

        let expected_height = duration as f32 / slot.minutes() as f32 * config.slot_height_px();
        let expected_top = start as f32 / slot.minutes() as f32 * config.slot_height_px();
        prop_assert_eq!(position.height, expected_height);
        prop_assert_eq!(position.top, expected_top);
    }

    /// Property: events shorter than a slot are drawn one slot tall
    #[test]
    fn prop_short_events_get_minimum_height(
        slot in any_slot(),
        start in 0u32..600,
        duration in 0u32..5,
    ) {
        let config = GridConfig::with_slot(slot);
        let position = compute_event_position(&appointment(1, 1, start, duration), &config);
        prop_assert_eq!(position.height, config.slot_height_px());
    }

    /// Property: a drop lands exactly on the target slot and professional
    #[test]
    fn prop_drop_lands_on_slot(
        slot in any_slot(),
        row in 0u32..144,
        source in 1i64..10,
        target in 1i64..10,
    ) {
        let config = GridConfig::with_slot(slot);
        let slot_minutes = (row % config.total_slots()) * slot.minutes();

        let mut drag = DragManager::new();
        drag.on_drag_start(&appointment(5, source, 60, 45));
        let intent = drag.on_drop(target, slot_minutes, day(), &config, Sao_Paulo);

        match intent {
            Some(AgendaIntent::AppointmentDropped(drop)) => {
                prop_assert_eq!(drop.new_start.naive_local(), grid_time(slot_minutes));
                prop_assert_eq!(drop.new_professional_id, target);
                prop_assert_eq!(drop.new_end() - drop.new_start, Duration::minutes(45));
            }
            other => prop_assert!(false, "unexpected intent {:?}", other),
        }
        prop_assert!(!drag.is_active());
    }

    /// Property: overlapping spans never share a lane
    #[test]
    fn prop_overlapping_spans_use_distinct_lanes(
        raw in prop::collection::vec((0u32..700, 1u32..120), 0..12),
    ) {
        let spans: Vec<(f32, f32)> = raw
            .iter()
            .map(|&(top, height)| (top as f32, (top + height) as f32))
            .collect();
        let lanes = assign_lanes(&spans);

        prop_assert_eq!(lanes.len(), spans.len());
        for (i, a) in spans.iter().enumerate() {
            prop_assert!(lanes[i].lane < lanes[i].lane_count);
            for (j, b) in spans.iter().enumerate().skip(i + 1) {
                if a.0 < b.1 && b.0 < a.1 {
                    prop_assert_ne!(lanes[i].lane, lanes[j].lane);
                    prop_assert_eq!(lanes[i].lane_count, lanes[j].lane_count);
                }
            }
        }
    }

    /// Property: laying out the same inputs twice gives the same result
    #[test]
    fn prop_layout_is_idempotent(
        slot in any_slot(),
        raw in prop::collection::vec((1i64..4, 0u32..720, 5u32..180), 0..10),
    ) {
        let events = raw
            .iter()
            .enumerate()
            .map(|(i, &(professional_id, start, duration))| {
                appointment(i as i64 + 1, professional_id, start, duration)
            })
            .collect();
        let snapshot = AgendaSnapshot {
            professionals: (1..4)
                .map(|id| Professional::new(id, format!("Pro {id}")))
                .collect(),
            events,
        };

        let mut grid = AgendaGrid::new(AgendaSettings {
            slot_minutes: slot,
            ..AgendaSettings::default()
        })
        .unwrap();
        let ctx = AgendaViewContext::new(day());

        let first = grid.layout(&ctx, &snapshot, 1280.0, grid_time(90));
        let second = grid.layout(&ctx, &snapshot, 1280.0, grid_time(90));
        prop_assert_eq!(first, second);
    }
}
