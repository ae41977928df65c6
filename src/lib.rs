//! ankiviz
//!
//! Replays an Anki review log as a live, color-coded terminal animation.
//!
//! Follows a Pure Core / Impure Shell layout: `model`, `replay::index` and
//! `view_state` are pure; `source`, `replay::clock`, `logging` and `view`
//! touch the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod replay;
pub mod source;
pub mod view;
pub mod view_state;

// Load-and-filter glue between sources and the engine
pub mod integration;
