//! Intensity palette and fixed styles.
//!
//! Styling is computed per call from the intensity level; there is no shared
//! mutable style object.

use crate::model::{IntensityLevel, PaletteSize, StepDirection};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Gradient stops: least favorable, middle, most favorable.
const GRADIENT: [(u8, u8, u8); 3] = [(0xc0, 0x39, 0x2b), (0xf3, 0x9c, 0x12), (0x27, 0xae, 0x60)];

/// Foreground used on colored backgrounds.
const TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);

/// Title bar background.
const TITLE_BACKGROUND: Color = Color::Rgb(0x24, 0x00, 0x1e);

/// Color of `level` in a palette of `palette` colors.
///
/// Index 0 is the least favorable color, `size - 1` the most favorable.
/// Levels above the maximum are clamped.
pub fn palette_color(level: IntensityLevel, palette: PaletteSize) -> Color {
    let max = u32::from(palette.max_level().get());
    let level = u32::from(level.get()).min(max);

    // Position along the two-segment gradient, scaled to 0..=2*max.
    let scaled = level * 2;
    let (from, to, num) = if scaled <= max {
        (GRADIENT[0], GRADIENT[1], scaled)
    } else {
        (GRADIENT[1], GRADIENT[2], scaled - max)
    };

    let mix = |a: u8, b: u8| -> u8 {
        let a = i64::from(a);
        let b = i64::from(b);
        let value = a + (b - a) * i64::from(num) / i64::from(max);
        value.clamp(0, 255) as u8
    };
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Style of an item line at `level`.
pub fn intensity_style(level: IntensityLevel, palette: PaletteSize, colors: ColorConfig) -> Style {
    if colors.colors_enabled() {
        Style::default()
            .fg(TEXT)
            .bg(palette_color(level, palette))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Extra emphasis for the item touched by the latest tick.
pub fn latest_style(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

/// Style of the title bar.
pub fn title_style(colors: ColorConfig) -> Style {
    if colors.colors_enabled() {
        Style::default()
            .fg(TEXT)
            .bg(TITLE_BACKGROUND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Style of the status bar.
pub fn status_style(colors: ColorConfig) -> Style {
    if colors.colors_enabled() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    }
}

/// Glyph shown before an item for its latest intensity change.
pub fn trend_glyph(step: StepDirection) -> &'static str {
    match step {
        StepDirection::Up => "▲",
        StepDirection::Down => "▼",
        StepDirection::Hold => "·",
    }
}

// ===== Tests =====
