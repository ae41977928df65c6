//! Status bar text.

use super::{ReplayPhase, ReplaySettings};
use crate::view_state::ViewStateEngine;

const SEPARATOR: &str = " | ";

/// Status bar contents for the current replay state.
///
/// Shows progress, the date and interval of the latest review, the playback
/// rate, the number of items, the render order and a hint. Before the first
/// tick the date and interval read `-`.
pub fn status_text(
    engine: &ViewStateEngine,
    settings: &ReplaySettings,
    phase: ReplayPhase,
) -> String {
    let current = engine.current_event();

    let date = current
        .and_then(|event| event.reviewed_at())
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let interval = current
        .map(|event| format_interval(event.interval))
        .unwrap_or_else(|| "-".to_string());

    let hint = match phase {
        ReplayPhase::Playing => "press any key to quit",
        ReplayPhase::Complete => "replay complete, press any key to quit",
    };

    [
        format!(" {}/{}", engine.cursor(), engine.total()),
        date,
        interval,
        format!("{}/s", settings.rate.get()),
        format!("{} items", engine.len()),
        settings.order.label().to_string(),
        hint.to_string(),
    ]
    .join(SEPARATOR)
}

/// Anki stores intervals in days when positive and in seconds when negative
/// (learning cards).
fn format_interval(interval: i64) -> String {
    if interval < 0 {
        format!("ivl {}s", interval.unsigned_abs())
    } else {
        format!("ivl {interval}d")
    }
}
