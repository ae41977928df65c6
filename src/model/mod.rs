//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors where a
//! value range matters.

pub mod error;
pub mod fields;
pub mod review;
pub mod trend;

// Re-export for convenience
pub use error::{AppError, LoadError};
pub use fields::FieldList;
pub use review::{RawReview, ReviewEvent, ReviewKey};
pub use trend::{IntensityLevel, InvalidPaletteSize, PaletteSize, StepDirection, Trend};
