//! Tick-driven view state.
//!
//! The engine owns the loaded events, the [`ReviewIndex`] built from them,
//! and an insertion-ordered map of [`ViewEntry`] values. Each tick resolves
//! the event at the next position and either inserts a new entry or updates
//! the trend and intensity of an existing one.

use super::entry::ViewEntry;
use super::RenderOrder;
use crate::model::{IntensityLevel, PaletteSize, ReviewEvent, ReviewKey, StepDirection};
use crate::replay::ReviewIndex;
use std::collections::HashMap;
use tracing::debug;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// First sighting: a new entry was appended.
    Inserted {
        /// Index of the new entry in first-seen order.
        ordinal: usize,
    },
    /// Repeat sighting: an existing entry was updated.
    Updated {
        /// Index of the entry in first-seen order.
        ordinal: usize,
        /// How its intensity moved.
        direction: StepDirection,
    },
}

impl TickOutcome {
    /// First-seen index of the touched entry.
    pub fn ordinal(self) -> usize {
        match self {
            TickOutcome::Inserted { ordinal } | TickOutcome::Updated { ordinal, .. } => ordinal,
        }
    }
}

/// Replay state machine over a fixed event sequence.
#[derive(Debug, Clone)]
pub struct ViewStateEngine {
    events: Vec<ReviewEvent>,
    index: ReviewIndex,
    palette: PaletteSize,
    entries: Vec<ViewEntry>,
    lookup: HashMap<ReviewKey, usize>,
    cursor: usize,
    most_recent: Option<usize>,
}

impl ViewStateEngine {
    /// Engine over `events`, which must be positioned `0..len` in order.
    pub fn new(events: Vec<ReviewEvent>, palette: PaletteSize) -> Self {
        debug_assert!(
            events.iter().enumerate().all(|(i, e)| e.position == i),
            "events must be densely positioned in load order"
        );
        let index = ReviewIndex::build(&events);
        Self {
            events,
            index,
            palette,
            entries: Vec::new(),
            lookup: HashMap::new(),
            cursor: 0,
            most_recent: None,
        }
    }

    /// Replay the event at the next position.
    ///
    /// Returns `None` once every event has been replayed; the state then
    /// stays as it is.
    pub fn advance(&mut self) -> Option<TickOutcome> {
        if self.is_finished() {
            return None;
        }
        let outcome = self.on_tick(self.cursor);
        self.cursor += 1;
        Some(outcome)
    }

    /// Apply the event at `position`.
    ///
    /// Callers normally go through [`advance`](Self::advance), which keeps
    /// positions in order.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the loaded sequence.
    pub fn on_tick(&mut self, position: usize) -> TickOutcome {
        let event = &self.events[position];
        let key = &event.key;
        let interval = event.interval;

        let outcome = match self.lookup.get(key).copied() {
            None => {
                let ordinal = self.entries.len();
                self.entries.push(ViewEntry::first_sighting(
                    key.clone(),
                    ordinal,
                    position,
                    interval,
                    self.palette.default_level(),
                ));
                self.lookup.insert(key.clone(), ordinal);
                TickOutcome::Inserted { ordinal }
            }
            Some(ordinal) => {
                let next = self.index.consume_next(key);
                let max = self.palette.max_level();
                let entry = &mut self.entries[ordinal];
                let direction = entry.trend.step_towards(next);
                entry.intensity = entry.intensity.step(direction, max);
                entry.last_step = direction;
                entry.trend = next;
                entry.last_touched = position;
                entry.encounters += 1;
                entry.last_interval = interval;
                TickOutcome::Updated { ordinal, direction }
            }
        };

        self.most_recent = Some(outcome.ordinal());
        debug!(position, ?outcome, "Tick applied");
        outcome
    }

    /// Entries in the requested order.
    pub fn snapshot(&self, order: RenderOrder) -> Vec<&ViewEntry> {
        match order {
            RenderOrder::FirstSeen => self.entries.iter().collect(),
            RenderOrder::NewestFirst => self.entries.iter().rev().collect(),
        }
    }

    /// `(key, intensity)` pairs in the requested order.
    pub fn render_pairs(&self, order: RenderOrder) -> Vec<(ReviewKey, IntensityLevel)> {
        self.snapshot(order)
            .into_iter()
            .map(|entry| (entry.key.clone(), entry.intensity))
            .collect()
    }

    /// Entry for `key`, if it has been sighted.
    pub fn entry(&self, key: &ReviewKey) -> Option<&ViewEntry> {
        self.lookup.get(key).map(|&ordinal| &self.entries[ordinal])
    }

    /// Entry touched by the latest tick.
    pub fn most_recent(&self) -> Option<&ViewEntry> {
        self.most_recent.map(|ordinal| &self.entries[ordinal])
    }

    /// Event replayed by the latest tick.
    pub fn current_event(&self) -> Option<&ReviewEvent> {
        self.cursor.checked_sub(1).map(|i| &self.events[i])
    }

    /// Number of ticks applied through [`advance`](Self::advance).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of loaded events.
    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// True once every event has been replayed.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Number of distinct items sighted so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first tick.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Palette the intensity levels are bounded by.
    pub fn palette(&self) -> PaletteSize {
        self.palette
    }

    /// The review index, with whatever gaps remain unconsumed.
    pub fn index(&self) -> &ReviewIndex {
        &self.index
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
