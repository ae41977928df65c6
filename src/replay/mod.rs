//! Replay plumbing: the occurrence index and the timed tick producer.

pub mod clock;
pub mod index;

pub use clock::{ClockHandle, ClockSignal, InvalidPlaybackRate, PlaybackRate, ReplayClock};
pub use index::ReviewIndex;
