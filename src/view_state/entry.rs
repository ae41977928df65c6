//! Per-item render state.

use crate::model::{IntensityLevel, ReviewKey, StepDirection, Trend};

/// Render state of one vocabulary item.
///
/// Created on the item's first sighting and updated on every later one.
/// Entries are never removed during a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub(crate) key: ReviewKey,
    pub(crate) trend: Trend,
    pub(crate) intensity: IntensityLevel,
    pub(crate) last_step: StepDirection,
    pub(crate) ordinal: usize,
    pub(crate) first_seen: usize,
    pub(crate) last_touched: usize,
    pub(crate) encounters: usize,
    pub(crate) last_interval: i64,
}

impl ViewEntry {
    pub(crate) fn first_sighting(
        key: ReviewKey,
        ordinal: usize,
        position: usize,
        interval: i64,
        intensity: IntensityLevel,
    ) -> Self {
        Self {
            key,
            trend: Trend::FirstSighting,
            intensity,
            last_step: StepDirection::Hold,
            ordinal,
            first_seen: position,
            last_touched: position,
            encounters: 1,
            last_interval: interval,
        }
    }

    /// Item identity.
    pub fn key(&self) -> &ReviewKey {
        &self.key
    }

    /// Most recent gap trend.
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Current intensity level.
    pub fn intensity(&self) -> IntensityLevel {
        self.intensity
    }

    /// Direction of the most recent intensity change; `Hold` before any.
    pub fn last_step(&self) -> StepDirection {
        self.last_step
    }

    /// Index in first-seen order.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Position of the first sighting.
    pub fn first_seen(&self) -> usize {
        self.first_seen
    }

    /// Position of the most recent sighting.
    pub fn last_touched(&self) -> usize {
        self.last_touched
    }

    /// Sightings so far, including the first.
    pub fn encounters(&self) -> usize {
        self.encounters
    }

    /// Scheduler interval reported by the most recent sighting.
    pub fn last_interval(&self) -> i64 {
        self.last_interval
    }
}
