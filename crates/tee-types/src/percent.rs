use serde::{Deserialize, Serialize};

/// An integer percentage, always within [0, 100].
///
/// Used for the material dynamics sliders (opacity, stretch, structure) and
/// add-on intensity. Every constructor clamps, so out-of-range input from a
/// slider or the wire can never produce an out-of-range value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    /// Clamp an integer into range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Round (half up) and clamp a float. NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(round_half_up(value).clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The value as a fraction in [0, 1].
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<u8> for Percent {
    fn from(value: u8) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> u8 {
        value.0
    }
}

/// Round to the nearest integer with halves going toward +inf.
/// Unlike `f64::round`, -2.5 becomes -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_integers() {
        assert_eq!(Percent::new(-20).value(), 0);
        assert_eq!(Percent::new(250).value(), 100);
        assert_eq!(Percent::new(42).value(), 42);
    }

    #[test]
    fn rounds_floats_half_up() {
        assert_eq!(Percent::from_f64(49.5).value(), 50);
        assert_eq!(Percent::from_f64(49.4).value(), 49);
        assert_eq!(Percent::from_f64(f64::NAN), Percent::ZERO);
        assert_eq!(Percent::from_f64(1e9), Percent::FULL);
    }

    #[test]
    fn round_half_up_differs_from_round_for_negative_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(1.5), 2.0);
    }
}
