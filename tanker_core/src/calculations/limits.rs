//! # Limit Evaluation
//!
//! Compares derived weights against the certified MTOW/MLW of the selected
//! aircraft and works out how much fuel may legally be loaded.
//!
//! Two ceilings bound the fuel load:
//!
//! - **By MTOW**: `mtow - zfw`
//! - **By MLW**: `mlw + trip_plus_taxi - zfw`. Fuel burned on the first
//!   sector doesn't reach the landing, so it is added back.
//!
//! The lower one binds. Nothing here fails; out-of-envelope conditions come
//! back as flags on [`LimitEvaluation`].

use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftLimits;
use crate::calculations::weights::DerivedWeights;
use crate::normalize::NormalizedInput;
use crate::units::Kilograms;

/// Which weight limit caps the allowed fuel load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingConstraint {
    /// Maximum Takeoff Weight
    Mtow,
    /// Maximum Landing Weight
    Mlw,
}

/// Limit comparison results for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitEvaluation {
    /// MTOW used for the comparison, in kilograms
    pub mtow_limit_kg: Kilograms,

    /// MLW used for the comparison, in kilograms
    pub mlw_limit_kg: Kilograms,

    /// LWG - MLW, rounded. Positive means landing overweight.
    pub mlw_delta_kg: Kilograms,

    /// Fuel ceiling from the takeoff limit alone (unrounded)
    pub max_tank_by_mtow_kg: Kilograms,

    /// Fuel ceiling from the landing limit alone (unrounded)
    pub max_tank_by_mlw_kg: Kilograms,

    /// Maximum fuel that may legally be loaded, rounded
    pub tank_allowed_kg: Kilograms,

    /// Payload reduction needed to land within MLW (same as the MLW delta)
    pub delta_reduce_zfw_kg: Kilograms,

    /// TOW > MTOW
    pub tow_exceeds: bool,

    /// LWG > MLW
    pub lwg_exceeds: bool,

    /// Allowed tank fuel < tanker fuel
    pub tank_exceeds: bool,
}

impl LimitEvaluation {
    /// The ceiling that sets `tank_allowed_kg`
    pub fn binding_constraint(&self) -> BindingConstraint {
        if self.max_tank_by_mtow_kg <= self.max_tank_by_mlw_kg {
            BindingConstraint::Mtow
        } else {
            BindingConstraint::Mlw
        }
    }

    /// True when none of the exceedance flags is set
    pub fn within_limits(&self) -> bool {
        !(self.tow_exceeds || self.lwg_exceeds || self.tank_exceeds)
    }
}

/// Evaluate derived weights against already-normalized limits.
///
/// # Example
///
/// ```rust
/// use tanker_core::aircraft::AircraftLimits;
/// use tanker_core::calculations::limits::evaluate_limits;
/// use tanker_core::calculations::weights::calculate_weights;
/// use tanker_core::normalize::NormalizedInput;
/// use tanker_core::units::Kilograms;
///
/// let input = NormalizedInput {
///     taxi: Kilograms(200.0),
///     sector1: Kilograms(9000.0),
///     zfw: Kilograms(60000.0),
///     trip_plus_taxi: Kilograms(9200.0),
///     ..NormalizedInput::default()
/// };
/// let weights = calculate_weights(&input);
/// let eval = evaluate_limits(&input, &weights, &AircraftLimits::new(77000.0, 66000.0));
///
/// assert_eq!(eval.mlw_delta_kg.0, -6000.0);
/// assert_eq!(eval.tank_allowed_kg.0, 15200.0);
/// assert!(!eval.tank_exceeds);
/// ```
pub fn evaluate_limits(
    input: &NormalizedInput,
    weights: &DerivedWeights,
    limits: &AircraftLimits,
) -> LimitEvaluation {
    let mtow_limit = limits.mtow;
    let mlw_limit = limits.mlw;

    let mlw_delta = (weights.lwg_kg - mlw_limit).rounded();

    let max_tank_by_mtow = mtow_limit - input.zfw;
    let max_tank_by_mlw = mlw_limit + input.trip_plus_taxi - input.zfw;
    let tank_allowed = max_tank_by_mtow.min(max_tank_by_mlw).rounded();

    LimitEvaluation {
        mtow_limit_kg: mtow_limit,
        mlw_limit_kg: mlw_limit,
        mlw_delta_kg: mlw_delta,
        max_tank_by_mtow_kg: max_tank_by_mtow,
        max_tank_by_mlw_kg: max_tank_by_mlw,
        tank_allowed_kg: tank_allowed,
        delta_reduce_zfw_kg: mlw_delta,
        tow_exceeds: weights.tow_kg > mtow_limit,
        lwg_exceeds: weights.lwg_kg > mlw_limit,
        tank_exceeds: tank_allowed < weights.tanker_fuel_kg,
    }
}
