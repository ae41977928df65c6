//! Item list rendering.
//!
//! One line per sighted item: trend glyph, combined kanji/reading label and
//! translation, colored by intensity.

use super::constants::LABEL_WIDTH;
use super::styles::{intensity_style, latest_style, trend_glyph, ColorConfig};
use crate::model::{FieldList, PaletteSize};
use crate::view_state::{RenderOrder, ViewEntry};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `text` to exactly `width` display columns.
///
/// Wide characters that would straddle the boundary are dropped and the gap
/// filled with spaces.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    debug_assert_eq!(out.width(), width);
    out
}

/// Entries that fit in `height` lines.
///
/// First-seen order grows downward, so the newest lines (the tail) stay
/// visible. Newest-first order shows the head.
pub fn visible_entries<'a>(
    entries: &'a [&'a ViewEntry],
    order: RenderOrder,
    height: usize,
) -> &'a [&'a ViewEntry] {
    if entries.len() <= height {
        return entries;
    }
    match order {
        RenderOrder::FirstSeen => &entries[entries.len() - height..],
        RenderOrder::NewestFirst => &entries[..height],
    }
}

/// Line for a single entry.
pub fn item_line(
    entry: &ViewEntry,
    palette: PaletteSize,
    colors: ColorConfig,
    is_latest: bool,
) -> Line<'static> {
    let fields = FieldList::decode(entry.key().as_str());
    let mut style = intensity_style(entry.intensity(), palette, colors);
    if is_latest {
        style = latest_style(style);
    }
    Line::from(vec![
        Span::raw(format!("{} ", trend_glyph(entry.last_step()))),
        Span::styled(
            format!(
                "{} {}",
                fit_width(fields.combined(), LABEL_WIDTH),
                fields.translation()
            ),
            style,
        ),
    ])
}

/// Render the visible part of `entries` into `area`.
pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    entries: &[&ViewEntry],
    order: RenderOrder,
    latest: Option<usize>,
    palette: PaletteSize,
    colors: ColorConfig,
) {
    let visible = visible_entries(entries, order, usize::from(area.height));
    let lines: Vec<Line> = visible
        .iter()
        .map(|entry| item_line(entry, palette, colors, latest == Some(entry.ordinal())))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
