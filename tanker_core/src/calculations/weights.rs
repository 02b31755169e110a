//! # Weight Calculation
//!
//! Derives tanker fuel, takeoff weight and landing weight from a normalized
//! input snapshot.
//!
//! Each stage is rounded to the nearest whole kilogram before it feeds the
//! next one, so `tow` is built from the rounded tanker figure and `lwg` from
//! the rounded `tow`:
//!
//! ```text
//! tanker = round(taxi + sector4 + sector3 + sector2 + sector1)
//! tow    = round(zfw + tanker)
//! lwg    = round(tow - trip_plus_taxi)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::calculations::weights::calculate_weights;
//! use tanker_core::normalize::NormalizedInput;
//! use tanker_core::units::Kilograms;
//!
//! let input = NormalizedInput {
//!     taxi: Kilograms(200.0),
//!     sector1: Kilograms(9000.0),
//!     zfw: Kilograms(60000.0),
//!     trip_plus_taxi: Kilograms(9200.0),
//!     ..NormalizedInput::default()
//! };
//! let weights = calculate_weights(&input);
//! assert_eq!(weights.tow_kg.0, 69200.0);
//! assert_eq!(weights.lwg_kg.0, 60000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedInput;
use crate::units::Kilograms;

/// Weights derived from one input snapshot, each rounded to whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedWeights {
    /// Total fuel to uplift: taxi plus every sector
    pub tanker_fuel_kg: Kilograms,

    /// Takeoff weight: ZFW + tanker fuel
    pub tow_kg: Kilograms,

    /// Landing weight after the first sector: TOW - (trip + taxi)
    pub lwg_kg: Kilograms,
}

/// Total fuel to be tankered.
pub fn tanker_fuel(input: &NormalizedInput) -> Kilograms {
    [
        input.taxi,
        input.sector4,
        input.sector3,
        input.sector2,
        input.sector1,
    ]
    .into_iter()
    .sum::<Kilograms>()
    .rounded()
}

/// Takeoff weight from ZFW and the (already rounded) tanker fuel.
pub fn takeoff_weight(zfw: Kilograms, tanker_fuel: Kilograms) -> Kilograms {
    (zfw + tanker_fuel).rounded()
}

/// Landing weight from the (already rounded) TOW and first-sector burn.
pub fn landing_weight(tow: Kilograms, trip_plus_taxi: Kilograms) -> Kilograms {
    (tow - trip_plus_taxi).rounded()
}

/// Run all three stages.
pub fn calculate_weights(input: &NormalizedInput) -> DerivedWeights {
    let tanker_fuel_kg = tanker_fuel(input);
    let tow_kg = takeoff_weight(input.zfw, tanker_fuel_kg);
    let lwg_kg = landing_weight(tow_kg, input.trip_plus_taxi);

    DerivedWeights {
        tanker_fuel_kg,
        tow_kg,
        lwg_kg,
    }
}
