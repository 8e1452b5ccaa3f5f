// Salon Agenda
// Prints the agenda grid layout computed for a saved backend snapshot

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use std::path::Path;

use salon_agenda::services::grid::AgendaGrid;
use salon_agenda::services::settings::SettingsStore;
use salon_agenda::services::snapshot::load_snapshot;
use salon_agenda::services::view_context::AgendaViewContext;

const VIEWPORT_WIDTH: f32 = 1280.0;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(snapshot_path) = args.next() else {
        bail!("usage: salon-agenda <snapshot.json> [YYYY-MM-DD]");
    };

    let store = SettingsStore::from_env();
    let settings = store.load()?;
    log::info!("Using settings from {}", store.path().display());

    let mut grid = AgendaGrid::new(settings)?;
    let tz = grid.time_zone();
    let now = Utc::now().with_timezone(&tz).naive_local();

    let date = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}'", raw))?,
        None => now.date(),
    };

    let snapshot = load_snapshot(Path::new(&snapshot_path), tz)?;
    let ctx = AgendaViewContext::new(date);
    let layout = grid.layout(&ctx, &snapshot, VIEWPORT_WIDTH, now);

    println!(
        "Agenda for {} ({} min slots, {} rows)",
        layout.date,
        grid.config().slot_minutes(),
        layout.slots.len()
    );
    if let Some(offset) = layout.now_offset {
        println!("Now line at {:.0}px", offset);
    }

    for column in &layout.columns {
        let name = snapshot
            .professionals
            .iter()
            .find(|p| p.id == column.professional_id)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        println!();
        println!("{} [x={:.0} w={:.0}]", name, column.left, column.width);

        let mut any = false;
        for event in layout.events_in_column(column.professional_id) {
            any = true;
            println!(
                "  {}  {:<32} {:<11} top={:>6.1} h={:>6.1} lane {}/{}{}",
                event.time_label,
                event.title,
                event.status.label(),
                event.top,
                event.height,
                event.lane.lane + 1,
                event.lane.lane_count,
                if event.clipped_start || event.clipped_end {
                    " (clipped)"
                } else {
                    ""
                }
            );
        }
        if !any {
            println!("  (free)");
        }
    }

    Ok(())
}
