//! Review trend and intensity newtypes.

use thiserror::Error;

/// Gap trend of an item between consecutive sightings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// The item has been seen exactly once so far.
    FirstSighting,
    /// No further gap can be measured for the item.
    Unknown,
    /// Distance in ticks between the two most recent sightings.
    Delta(usize),
}

impl Trend {
    /// Raw value used by the legacy numeric encoding.
    pub const FIRST_SIGHTING_RAW: i64 = -1;
    /// Raw value used by the legacy numeric encoding.
    pub const UNKNOWN_RAW: i64 = -10;

    /// Legacy numeric encoding: `-1`, `-10`, or the gap itself.
    pub fn as_raw(self) -> i64 {
        match self {
            Trend::FirstSighting => Self::FIRST_SIGHTING_RAW,
            Trend::Unknown => Self::UNKNOWN_RAW,
            Trend::Delta(gap) => i64::try_from(gap).unwrap_or(i64::MAX),
        }
    }

    /// Whether this is a measured gap.
    pub fn is_delta(self) -> bool {
        matches!(self, Trend::Delta(_))
    }

    /// Direction intensity should move when `next` replaces `self`.
    ///
    /// A gap at least as long as the previous one counts as improving. Any
    /// measured gap improves on a sentinel. An unknown trend never moves.
    pub fn step_towards(self, next: Trend) -> StepDirection {
        match (self, next) {
            (_, Trend::Unknown | Trend::FirstSighting) => StepDirection::Hold,
            (Trend::Delta(old), Trend::Delta(new)) if new < old => StepDirection::Down,
            (_, Trend::Delta(_)) => StepDirection::Up,
        }
    }
}

/// How an update moved an entry's intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Gap grew or stayed equal.
    Up,
    /// Gap shrank.
    Down,
    /// Trend undefined; level left alone.
    Hold,
}

/// Number of colors in the intensity palette.
///
/// The highest intensity level is `size - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteSize(u8);

/// Error returned for a palette size outside [`PaletteSize::MIN`]..=[`PaletteSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("palette size must be between 2 and 16 (got {0})")]
pub struct InvalidPaletteSize(pub u8);

impl PaletteSize {
    /// Smallest usable palette: one "bad" and one "good" color.
    pub const MIN: u8 = 2;
    /// Largest palette the renderer's gradient supports.
    pub const MAX: u8 = 16;
    /// Palette size used when none is configured.
    pub const DEFAULT: Self = Self(5);

    /// Smart constructor.
    pub fn new(size: u8) -> Result<Self, InvalidPaletteSize> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(InvalidPaletteSize(size))
        }
    }

    /// Number of colors.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Highest intensity level.
    pub fn max_level(self) -> IntensityLevel {
        IntensityLevel(self.0 - 1)
    }

    /// Level given to an item on first sighting: the palette midpoint.
    pub fn default_level(self) -> IntensityLevel {
        IntensityLevel((self.0 - 1) / 2)
    }
}

impl Default for PaletteSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Visual intensity of an item, `0` = least favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IntensityLevel(u8);

impl IntensityLevel {
    /// Lowest level.
    pub const ZERO: Self = Self(0);

    /// Create a level from a raw value.
    pub fn new(level: u8) -> Self {
        Self(level)
    }

    /// Raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One step up, saturating at `max`.
    pub fn step_up(self, max: IntensityLevel) -> Self {
        Self(self.0.saturating_add(1).min(max.0))
    }

    /// One step down, saturating at zero.
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Apply a step direction.
    pub fn step(self, direction: StepDirection, max: IntensityLevel) -> Self {
        match direction {
            StepDirection::Up => self.step_up(max),
            StepDirection::Down => self.step_down(),
            StepDirection::Hold => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_encoding_matches_legacy_sentinels() {
        assert_eq!(Trend::FirstSighting.as_raw(), -1);
        assert_eq!(Trend::Unknown.as_raw(), -10);
        assert_eq!(Trend::Delta(12).as_raw(), 12);
    }

    #[test]
    fn first_real_gap_steps_up() {
        assert_eq!(
            Trend::FirstSighting.step_towards(Trend::Delta(2)),
            StepDirection::Up
        );
    }

    #[test]
    fn gap_after_unknown_steps_up() {
        assert_eq!(Trend::Unknown.step_towards(Trend::Delta(1)), StepDirection::Up);
    }

    #[test]
    fn equal_gap_steps_up() {
        assert_eq!(Trend::Delta(4).step_towards(Trend::Delta(4)), StepDirection::Up);
    }

    #[test]
    fn shorter_gap_steps_down() {
        assert_eq!(Trend::Delta(4).step_towards(Trend::Delta(3)), StepDirection::Down);
    }

    #[test]
    fn unknown_holds() {
        for prev in [Trend::FirstSighting, Trend::Unknown, Trend::Delta(9)] {
            assert_eq!(prev.step_towards(Trend::Unknown), StepDirection::Hold);
        }
    }

    #[test]
    fn palette_size_rejects_out_of_range() {
        assert_eq!(PaletteSize::new(1), Err(InvalidPaletteSize(1)));
        assert_eq!(PaletteSize::new(17), Err(InvalidPaletteSize(17)));
        assert!(PaletteSize::new(2).is_ok());
        assert!(PaletteSize::new(16).is_ok());
    }

    #[test]
    fn palette_levels() {
        let palette = PaletteSize::new(5).unwrap();
        assert_eq!(palette.max_level(), IntensityLevel::new(4));
        assert_eq!(palette.default_level(), IntensityLevel::new(2));

        let two = PaletteSize::new(2).unwrap();
        assert_eq!(two.max_level(), IntensityLevel::new(1));
        assert_eq!(two.default_level(), IntensityLevel::ZERO);
    }

    #[test]
    fn steps_saturate() {
        let max = IntensityLevel::new(3);
        assert_eq!(IntensityLevel::new(3).step_up(max), max);
        assert_eq!(IntensityLevel::ZERO.step_down(), IntensityLevel::ZERO);
        assert_eq!(IntensityLevel::new(1).step_up(max), IntensityLevel::new(2));
        assert_eq!(
            IntensityLevel::new(2).step(StepDirection::Hold, max),
            IntensityLevel::new(2)
        );
    }
}
