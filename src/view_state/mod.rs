//! View state (pure core).
//!
//! Per-item trend and intensity, in first-seen order, updated one tick at a
//! time. The renderer reads snapshots of this state; it never mutates it.

pub mod engine;
pub mod entry;

pub use engine::{TickOutcome, ViewStateEngine};
pub use entry::ViewEntry;

use serde::Deserialize;

/// Order in which items are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderOrder {
    /// Oldest item first; new items are appended at the bottom.
    #[default]
    FirstSeen,
    /// Exact reverse of first-seen; new items appear at the top.
    NewestFirst,
}

impl RenderOrder {
    /// Label shown in the status bar.
    pub fn label(self) -> &'static str {
        match self {
            RenderOrder::FirstSeen => "first-seen",
            RenderOrder::NewestFirst => "newest-first",
        }
    }
}
