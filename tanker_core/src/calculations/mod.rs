//! # Tankering Calculations
//!
//! A calculator panel follows the pattern:
//!
//! - [`CalculatorInput`] - raw strings, exactly as typed (JSON-serializable)
//! - [`PanelResult`] - every derived figure plus the exceedance flags
//! - [`calculate`] - pure function from one to the other
//!
//! The pipeline is normalize -> [`weights`] -> [`limits`]. It never fails;
//! every input snapshot yields a complete result.
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::aircraft::{AircraftModel, EngineVariant};
//! use tanker_core::calculations::{calculate, CalculatorInput, InputField};
//!
//! let mut input = CalculatorInput::default();
//! input.set(InputField::Taxi, "0.2");
//! input.set(InputField::Sector1, "9000");
//! input.set(InputField::Zfw, "60000");
//! input.set(InputField::TripPlusTaxi, "9200");
//!
//! let result = calculate(&input, AircraftModel::A320, EngineVariant::Ceo);
//! assert_eq!(result.tow(), 69200);
//! assert_eq!(result.tank_allowed(), 15200);
//! assert!(!result.tank_exceeds());
//! ```

pub mod limits;
pub mod weights;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{aircraft_limits, AircraftLimits, AircraftModel, EngineVariant};
use crate::errors::{CalcError, CalcResult};
use crate::normalize::{normalize_limits, NormalizedInput};

// Re-export commonly used types
pub use limits::{evaluate_limits, BindingConstraint, LimitEvaluation};
pub use weights::{calculate_weights, DerivedWeights};

/// Raw input fields of one calculator panel.
///
/// Every field is free text: it may be empty, half-typed, or use a comma as
/// the decimal separator. Nothing is validated here.
///
/// ## JSON Example
///
/// ```json
/// {
///   "taxi": "0.2",
///   "sector4": "",
///   "sector3": "",
///   "sector2": "",
///   "sector1": "9000",
///   "zfw": "60000",
///   "tripPlusTaxi": "9200"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInput {
    /// Taxi fuel, tons (`0.2`) or kilograms (`200`)
    pub taxi: String,
    pub sector4: String,
    pub sector3: String,
    pub sector2: String,
    pub sector1: String,
    /// Zero Fuel Weight (kg)
    pub zfw: String,
    /// Sector 1 trip fuel plus taxi (kg)
    pub trip_plus_taxi: String,
}

impl CalculatorInput {
    /// Replace one field's text.
    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Read one field's text.
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Taxi => &self.taxi,
            InputField::Sector4 => &self.sector4,
            InputField::Sector3 => &self.sector3,
            InputField::Sector2 => &self.sector2,
            InputField::Sector1 => &self.sector1,
            InputField::Zfw => &self.zfw,
            InputField::TripPlusTaxi => &self.trip_plus_taxi,
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Taxi => &mut self.taxi,
            InputField::Sector4 => &mut self.sector4,
            InputField::Sector3 => &mut self.sector3,
            InputField::Sector2 => &mut self.sector2,
            InputField::Sector1 => &mut self.sector1,
            InputField::Zfw => &mut self.zfw,
            InputField::TripPlusTaxi => &mut self.trip_plus_taxi,
        }
    }

    /// Clear every field back to the empty string.
    pub fn reset(&mut self) {
        *self = CalculatorInput::default();
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        InputField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// The seven input fields of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Taxi,
    Sector4,
    Sector3,
    Sector2,
    Sector1,
    Zfw,
    TripPlusTaxi,
}

impl InputField {
    /// All fields in panel order
    pub const ALL: [InputField; 7] = [
        InputField::Taxi,
        InputField::Sector4,
        InputField::Sector3,
        InputField::Sector2,
        InputField::Sector1,
        InputField::Zfw,
        InputField::TripPlusTaxi,
    ];

    /// Key used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            InputField::Taxi => "taxi",
            InputField::Sector4 => "sector4",
            InputField::Sector3 => "sector3",
            InputField::Sector2 => "sector2",
            InputField::Sector1 => "sector1",
            InputField::Zfw => "zfw",
            InputField::TripPlusTaxi => "tripPlusTaxi",
        }
    }

    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Taxi => "Taxi",
            InputField::Sector4 => "Sec 4",
            InputField::Sector3 => "Sec 3",
            InputField::Sector2 => "Sec 2",
            InputField::Sector1 => "Sec 1",
            InputField::Zfw => "ZFW (KG)",
            InputField::TripPlusTaxi => "Sector 1 (Trip+Taxi)",
        }
    }

    /// Placeholder text for an empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputField::Taxi => "0.2",
            _ => "0",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InputField {
    type Err = CalcError;

    /// Accepts the JSON key in any case, with `-`/`_` separators ignored
    /// (`tripPlusTaxi`, `trip-plus-taxi`, `TRIP_PLUS_TAXI`).
    fn from_str(s: &str) -> CalcResult<Self> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        InputField::ALL
            .into_iter()
            .find(|f| f.key().to_lowercase() == squashed)
            .ok_or_else(|| CalcError::unknown_field(s))
    }
}

/// Everything a panel displays for one input snapshot.
///
/// ## JSON Example
///
/// ```json
/// {
///   "model": "A320",
///   "variant": "CEO",
///   "limits": { "mtow": 77000.0, "mlw": 66000.0 },
///   "weights": { "tankerFuelKg": 9200.0, "towKg": 69200.0, "lwgKg": 60000.0 },
///   "evaluation": { "mlwDeltaKg": -6000.0, "tankAllowedKg": 15200.0, "...": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelResult {
    pub model: AircraftModel,
    pub variant: EngineVariant,
    /// Limits after normalization to kilograms
    pub limits: AircraftLimits,
    pub weights: DerivedWeights,
    pub evaluation: LimitEvaluation,
}

impl PanelResult {
    /// Tanker fuel (kg)
    pub fn tanker_fuel(&self) -> i64 {
        whole_kg(self.weights.tanker_fuel_kg.0)
    }

    /// Takeoff weight (kg)
    pub fn tow(&self) -> i64 {
        whole_kg(self.weights.tow_kg.0)
    }

    /// Landing weight (kg)
    pub fn lwg(&self) -> i64 {
        whole_kg(self.weights.lwg_kg.0)
    }

    /// LWG - MLW (kg)
    pub fn mlw_delta(&self) -> i64 {
        whole_kg(self.evaluation.mlw_delta_kg.0)
    }

    /// Maximum legal fuel load (kg)
    pub fn tank_allowed(&self) -> i64 {
        whole_kg(self.evaluation.tank_allowed_kg.0)
    }

    /// ZFW reduction needed to land within MLW (kg)
    pub fn delta_reduce_zfw(&self) -> i64 {
        whole_kg(self.evaluation.delta_reduce_zfw_kg.0)
    }

    pub fn tow_exceeds(&self) -> bool {
        self.evaluation.tow_exceeds
    }

    pub fn lwg_exceeds(&self) -> bool {
        self.evaluation.lwg_exceeds
    }

    pub fn tank_exceeds(&self) -> bool {
        self.evaluation.tank_exceeds
    }

    /// True when no exceedance flag is set
    pub fn within_limits(&self) -> bool {
        self.evaluation.within_limits()
    }

    /// The displayed figures as whole kilograms
    pub fn outputs(&self) -> PanelOutputs {
        PanelOutputs {
            tanker_fuel: self.tanker_fuel(),
            tow: self.tow(),
            lwg: self.lwg(),
            mlw_delta: self.mlw_delta(),
            tank_allowed: self.tank_allowed(),
            delta_reduce_zfw: self.delta_reduce_zfw(),
            tow_exceeds: self.tow_exceeds(),
            lwg_exceeds: self.lwg_exceeds(),
            tank_exceeds: self.tank_exceeds(),
        }
    }
}

/// The figures a panel shows, as integers.
///
/// ```json
/// {
///   "tankerFuel": 9200, "tow": 69200, "lwg": 60000, "mlwDelta": -6000,
///   "tankAllowed": 15200, "deltaReduceZfw": 0,
///   "towExceeds": false, "lwgExceeds": false, "tankExceeds": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOutputs {
    pub tanker_fuel: i64,
    pub tow: i64,
    pub lwg: i64,
    pub mlw_delta: i64,
    pub tank_allowed: i64,
    pub delta_reduce_zfw: i64,
    pub tow_exceeds: bool,
    pub lwg_exceeds: bool,
    pub tank_exceeds: bool,
}

// Inputs are clamped to MAX_INPUT_MAGNITUDE and every stage is rounded, so
// the value is a whole number well inside i64 and the cast is exact.
fn whole_kg(value: f64) -> i64 {
    value as i64
}

/// Run one panel against the static limits table.
pub fn calculate(input: &CalculatorInput, model: AircraftModel, variant: EngineVariant) -> PanelResult {
    calculate_with_limits(input, model, variant, &aircraft_limits(variant, model))
}

/// Run one panel against explicitly supplied limits.
///
/// Limits below 1000 are read as tons.
pub fn calculate_with_limits(
    input: &CalculatorInput,
    model: AircraftModel,
    variant: EngineVariant,
    limits: &AircraftLimits,
) -> PanelResult {
    let normalized = NormalizedInput::from_input(input);
    let limits = normalize_limits(limits);

    let weights = calculate_weights(&normalized);
    let evaluation = evaluate_limits(&normalized, &weights, &limits);

    debug!(
        %model,
        %variant,
        tanker_fuel = weights.tanker_fuel_kg.0,
        tow = weights.tow_kg.0,
        lwg = weights.lwg_kg.0,
        tank_allowed = evaluation.tank_allowed_kg.0,
        within_limits = evaluation.within_limits(),
        "panel calculated"
    );

    PanelResult {
        model,
        variant,
        limits,
        weights,
        evaluation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_input() -> CalculatorInput {
        CalculatorInput {
            taxi: "0.2".to_string(),
            sector4: "0".to_string(),
            sector3: "0".to_string(),
            sector2: "0".to_string(),
            sector1: "9000".to_string(),
            zfw: "60000".to_string(),
            trip_plus_taxi: "9200".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_ceo_a320() {
        let result = calculate(&scenario_input(), AircraftModel::A320, EngineVariant::Ceo);

        assert_eq!(result.model, AircraftModel::A320);
        assert_eq!(result.variant, EngineVariant::Ceo);
        assert_eq!(result.tanker_fuel(), 9200);
        assert_eq!(result.tow(), 69200);
        assert_eq!(result.lwg(), 60000);
        assert_eq!(result.mlw_delta(), -6000);
        assert_eq!(result.tank_allowed(), 15200);
        assert_eq!(result.delta_reduce_zfw(), -6000);
        assert!(!result.tow_exceeds());
        assert!(!result.lwg_exceeds());
        assert!(!result.tank_exceeds());
        assert!(result.within_limits());
    }

    #[test]
    fn test_exceedance_ceo_a320() {
        let input = CalculatorInput {
            sector2: "4000".to_string(),
            sector1: "5000".to_string(),
            zfw: "70000".to_string(),
            trip_plus_taxi: "8000".to_string(),
            ..CalculatorInput::default()
        };
        let result = calculate(&input, AircraftModel::A320, EngineVariant::Ceo);
        assert_eq!(result.tow(), 79000);
        assert!(result.tow_exceeds());
        assert!(!result.within_limits());
    }

    #[test]
    fn test_same_input_differs_by_variant() {
        let input = CalculatorInput {
            zfw: "70000".to_string(),
            sector1: "8000".to_string(),
            ..CalculatorInput::default()
        };
        // TOW 78000: over CEO MTOW (77000), under NEO MTOW (79000)
        assert!(calculate(&input, AircraftModel::A320, EngineVariant::Ceo).tow_exceeds());
        assert!(!calculate(&input, AircraftModel::A320, EngineVariant::Neo).tow_exceeds());
    }

    #[test]
    fn test_empty_input_result() {
        for variant in EngineVariant::ALL {
            for model in AircraftModel::ALL {
                let limits = aircraft_limits(variant, model);
                let result = calculate(&CalculatorInput::default(), model, variant);
                assert_eq!(result.tanker_fuel(), 0);
                assert_eq!(result.tow(), 0);
                assert_eq!(result.lwg(), 0);
                assert_eq!(result.evaluation.tank_allowed_kg, limits.mtow.min(limits.mlw));
            }
        }
    }

    #[test]
    fn test_reset_matches_empty_input() {
        let mut input = scenario_input();
        input.reset();
        assert!(input.is_empty());
        assert_eq!(
            calculate(&input, AircraftModel::A321, EngineVariant::Neo),
            calculate(&CalculatorInput::default(), AircraftModel::A321, EngineVariant::Neo)
        );
    }

    #[test]
    fn test_idempotent() {
        let input = scenario_input();
        let first = calculate(&input, AircraftModel::A321, EngineVariant::Ceo);
        let second = calculate(&input, AircraftModel::A321, EngineVariant::Ceo);
        assert_eq!(first, second);
    }

    #[test]
    fn test_limits_in_tons_are_normalized() {
        let result = calculate_with_limits(
            &scenario_input(),
            AircraftModel::A320,
            EngineVariant::Ceo,
            &AircraftLimits::new(77.0, 66.0),
        );
        assert_eq!(result.limits, AircraftLimits::new(77000.0, 66000.0));
        assert_eq!(result.tank_allowed(), 15200);
    }

    #[test]
    fn test_comma_decimals_and_garbage() {
        let input = CalculatorInput {
            taxi: "0,25".to_string(),
            sector1: "abc".to_string(),
            zfw: "60000kg".to_string(),
            ..CalculatorInput::default()
        };
        let result = calculate(&input, AircraftModel::A320, EngineVariant::Ceo);
        assert_eq!(result.tanker_fuel(), 250);
        assert_eq!(result.tow(), 60250);
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut input = CalculatorInput::default();
        for (i, field) in InputField::ALL.into_iter().enumerate() {
            input.set(field, i.to_string());
        }
        assert_eq!(input.get(InputField::Taxi), "0");
        assert_eq!(input.get(InputField::TripPlusTaxi), "6");
        assert_eq!(input.trip_plus_taxi, "6");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_parse_input_field() {
        assert_eq!("tripPlusTaxi".parse::<InputField>().unwrap(), InputField::TripPlusTaxi);
        assert_eq!("trip-plus-taxi".parse::<InputField>().unwrap(), InputField::TripPlusTaxi);
        assert_eq!("ZFW".parse::<InputField>().unwrap(), InputField::Zfw);
        assert_eq!("sector_4".parse::<InputField>().unwrap(), InputField::Sector4);
        assert_eq!("fuel".parse::<InputField>().unwrap_err().error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_input_serialization() {
        let json = serde_json::to_string(&scenario_input()).unwrap();
        assert!(json.contains("\"tripPlusTaxi\":\"9200\""));

        // Missing fields default to empty
        let partial: CalculatorInput = serde_json::from_str(r#"{"zfw":"61000"}"#).unwrap();
        assert_eq!(partial.zfw, "61000");
        assert_eq!(partial.taxi, "");
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&scenario_input(), AircraftModel::A320, EngineVariant::Ceo);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"tankAllowedKg\": 15200.0"));
        assert!(json.contains("\"towExceeds\": false"));
        let roundtrip: PanelResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }

    #[test]
    fn test_outputs_are_integers() {
        let result = calculate(&scenario_input(), AircraftModel::A320, EngineVariant::Ceo);
        let value = serde_json::to_value(result.outputs()).unwrap();
        assert_eq!(value["tow"], 69200);
        assert_eq!(value["mlwDelta"], -6000);
        assert_eq!(value["tankAllowed"], 15200);
        assert_eq!(value["tankExceeds"], false);
        assert!(value["tow"].is_i64());
    }

    #[test]
    fn test_huge_inputs_stay_finite() {
        let input = CalculatorInput {
            zfw: "1e308".to_string(),
            sector1: "1e308".to_string(),
            ..CalculatorInput::default()
        };
        let result = calculate(&input, AircraftModel::A320, EngineVariant::Ceo);

        assert!(result.weights.tow_kg.0.is_finite());
        assert_eq!(result.tow(), 2_000_000_000_000);
        assert!(result.tow_exceeds());

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }
}
