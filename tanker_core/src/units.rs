//! # Unit Types
//!
//! Type-safe wrappers for mass units. These keep tons and kilograms from
//! being mixed in arithmetic while staying plain `f64` newtypes, so JSON
//! serialization is just numbers.
//!
//! All weight arithmetic in this crate happens in [`Kilograms`]. [`Tons`]
//! only exists at the input edge, where an operator may have typed a
//! ton-denominated figure (see [`crate::normalize`]).
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::units::{Kilograms, Tons};
//!
//! let taxi: Kilograms = Tons(0.2).into();
//! assert_eq!(taxi.0, 200.0);
//!
//! let tow = Kilograms(60000.0) + Kilograms(9200.0);
//! assert_eq!(tow.rounded().0, 69200.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Kilograms per metric ton.
pub const KG_PER_TON: f64 = 1000.0;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in metric tons (1 t = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tons(pub f64);

impl From<Tons> for Kilograms {
    fn from(t: Tons) -> Self {
        Kilograms(t.0 * KG_PER_TON)
    }
}

impl Kilograms {
    /// Zero kilograms
    pub const ZERO: Kilograms = Kilograms(0.0);

    /// Round to the nearest whole kilogram, halves toward positive infinity.
    pub fn rounded(self) -> Self {
        Kilograms(round_half_up(self.0))
    }

    /// The smaller of two masses
    pub fn min(self, other: Self) -> Self {
        Kilograms(self.0.min(other.0))
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Kilograms::ZERO, |acc, kg| acc + kg)
    }
}

/// Round to the nearest integer, with exact halves going toward positive
/// infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// This differs from [`f64::round`], which rounds halves away from zero.
/// Every rounding stage in the calculator goes through here.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl Add for Kilograms {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Kilograms(self.0 + rhs.0)
    }
}

impl Sub for Kilograms {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Kilograms(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tons_to_kilograms() {
        let kg: Kilograms = Tons(1.5).into();
        assert_eq!(kg.0, 1500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilograms(10.0);
        let b = Kilograms(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_sum() {
        let total: Kilograms = [Kilograms(200.0), Kilograms(0.0), Kilograms(9000.0)]
            .into_iter()
            .sum();
        assert_eq!(total.0, 9200.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-6000.4), -6000.0);
        assert_eq!(round_half_up(-6000.6), -6001.0);
        assert_eq!(round_half_up(69200.0), 69200.0);
    }

    #[test]
    fn test_rounded_kilograms() {
        assert_eq!(Kilograms(199.99999999999997).rounded().0, 200.0);
        assert_eq!(Kilograms(-0.5).rounded().0, 0.0);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(77000.0);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "77000.0");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}
