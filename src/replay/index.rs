//! Key → occurrence positions index.

use crate::model::{ReviewEvent, ReviewKey, Trend};
use std::collections::{HashMap, VecDeque};

/// Remaining occurrence positions of every key, earliest first.
///
/// Built once from the full event sequence. Gaps are consumed from the front
/// as the replay reaches each repeat sighting; the queues never regrow.
#[derive(Debug, Clone, Default)]
pub struct ReviewIndex {
    positions: HashMap<ReviewKey, VecDeque<usize>>,
}

impl ReviewIndex {
    /// Build the index in one pass over the events, in load order.
    pub fn build(events: &[ReviewEvent]) -> Self {
        let mut positions: HashMap<ReviewKey, VecDeque<usize>> = HashMap::new();
        for event in events {
            positions
                .entry(event.key.clone())
                .or_default()
                .push_back(event.position);
        }
        Self { positions }
    }

    /// Gap between the two earliest remaining positions of `key`.
    ///
    /// Pops the earliest position when a gap is returned. With fewer than two
    /// positions left (or an unknown key) returns [`Trend::Unknown`] and
    /// leaves the queue untouched, so the last position is never consumed.
    pub fn consume_next(&mut self, key: &ReviewKey) -> Trend {
        let Some(queue) = self.positions.get_mut(key) else {
            return Trend::Unknown;
        };
        match (queue.front().copied(), queue.get(1).copied()) {
            (Some(first), Some(second)) => {
                queue.pop_front();
                Trend::Delta(second - first)
            }
            _ => Trend::Unknown,
        }
    }

    /// Positions not yet consumed for `key`.
    pub fn positions(&self, key: &ReviewKey) -> Option<&VecDeque<usize>> {
        self.positions.get(key)
    }

    /// Number of positions not yet consumed for `key`.
    pub fn remaining(&self, key: &ReviewKey) -> usize {
        self.positions.get(key).map_or(0, VecDeque::len)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.positions.len()
    }

    /// True when built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
