//! Layout dimension and timing constants for TUI rendering.
//!
//! Centralized location for layout-related values to enable consistent
//! tuning across the application.

use std::time::Duration;

/// Title shown on the first line.
pub const TITLE: &str = "anki visualizer";

/// Height of the title bar in lines.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for replay progress and the quit hint.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Display width the combined label is padded (or truncated) to.
pub const LABEL_WIDTH: usize = 30;

/// How long the event loop waits for a tick before checking input again.
///
/// Bounds input latency while ticks are flowing.
pub const TICK_WAIT: Duration = Duration::from_millis(10);

/// Input poll timeout once the replay has completed.
pub const IDLE_POLL: Duration = Duration::from_millis(250);
