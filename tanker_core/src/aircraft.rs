//! # Aircraft Limits
//!
//! Certified structural weight limits for the A320 family, keyed by engine
//! variant and airframe.
//!
//! | Variant | Model | MTOW (kg) | MLW (kg) |
//! |---------|-------|-----------|----------|
//! | CEO     | A320  | 77000     | 66000    |
//! | CEO     | A321  | 93500     | 77800    |
//! | NEO     | A320  | 79000     | 67400    |
//! | NEO     | A321  | 97000     | 79200    |
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::aircraft::{aircraft_limits, AircraftModel, EngineVariant};
//!
//! let limits = aircraft_limits(EngineVariant::Neo, AircraftModel::A321);
//! assert_eq!(limits.mtow.0, 97000.0);
//! assert_eq!(limits.mlw.0, 79200.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Kilograms;

/// Engine option fitted to the airframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EngineVariant {
    /// Current Engine Option
    #[default]
    #[serde(rename = "CEO")]
    Ceo,
    /// New Engine Option
    #[serde(rename = "NEO")]
    Neo,
}

impl EngineVariant {
    /// All engine variants for selector widgets
    pub const ALL: [EngineVariant; 2] = [EngineVariant::Ceo, EngineVariant::Neo];

    /// Short code ("CEO", "NEO")
    pub fn code(&self) -> &'static str {
        match self {
            EngineVariant::Ceo => "CEO",
            EngineVariant::Neo => "NEO",
        }
    }

    /// Label for the variant selector ("CEO Engine")
    pub fn display_name(&self) -> &'static str {
        match self {
            EngineVariant::Ceo => "CEO Engine",
            EngineVariant::Neo => "NEO Engine",
        }
    }
}

impl fmt::Display for EngineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EngineVariant {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "CEO" => Ok(EngineVariant::Ceo),
            "NEO" => Ok(EngineVariant::Neo),
            _ => Err(CalcError::unknown_variant(s)),
        }
    }
}

/// Airframe model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftModel {
    A320,
    A321,
}

impl AircraftModel {
    /// All models, in panel order
    pub const ALL: [AircraftModel; 2] = [AircraftModel::A320, AircraftModel::A321];

    /// Model designation ("A320", "A321")
    pub fn code(&self) -> &'static str {
        match self {
            AircraftModel::A320 => "A320",
            AircraftModel::A321 => "A321",
        }
    }
}

impl fmt::Display for AircraftModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AircraftModel {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "A320" | "320" => Ok(AircraftModel::A320),
            "A321" | "321" => Ok(AircraftModel::A321),
            _ => Err(CalcError::unknown_model(s)),
        }
    }
}

/// Certified maximum weights for one (variant, model) pair.
///
/// Both values are kilograms and `mlw < mtow` holds for every table row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftLimits {
    /// Maximum Takeoff Weight
    pub mtow: Kilograms,
    /// Maximum Landing Weight
    pub mlw: Kilograms,
}

impl AircraftLimits {
    /// Construct limits from raw kilogram figures
    pub const fn new(mtow_kg: f64, mlw_kg: f64) -> Self {
        AircraftLimits {
            mtow: Kilograms(mtow_kg),
            mlw: Kilograms(mlw_kg),
        }
    }

    /// Look up the static table row for an aircraft
    pub fn for_aircraft(variant: EngineVariant, model: AircraftModel) -> Self {
        aircraft_limits(variant, model)
    }
}

/// Static limits table lookup.
pub fn aircraft_limits(variant: EngineVariant, model: AircraftModel) -> AircraftLimits {
    match (variant, model) {
        (EngineVariant::Ceo, AircraftModel::A320) => AircraftLimits::new(77000.0, 66000.0),
        (EngineVariant::Ceo, AircraftModel::A321) => AircraftLimits::new(93500.0, 77800.0),
        (EngineVariant::Neo, AircraftModel::A320) => AircraftLimits::new(79000.0, 67400.0),
        (EngineVariant::Neo, AircraftModel::A321) => AircraftLimits::new(97000.0, 79200.0),
    }
}

/// A model paired with its selected engine variant and resulting limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Model designation shown in the panel header
    pub name: String,
    pub variant: EngineVariant,
    pub limits: AircraftLimits,
}

impl AircraftConfig {
    /// Build the configuration for a model under the given engine variant
    pub fn new(model: AircraftModel, variant: EngineVariant) -> Self {
        AircraftConfig {
            name: model.code().to_string(),
            variant,
            limits: aircraft_limits(variant, model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let ceo_320 = aircraft_limits(EngineVariant::Ceo, AircraftModel::A320);
        assert_eq!(ceo_320, AircraftLimits::new(77000.0, 66000.0));

        let ceo_321 = aircraft_limits(EngineVariant::Ceo, AircraftModel::A321);
        assert_eq!(ceo_321, AircraftLimits::new(93500.0, 77800.0));

        let neo_320 = aircraft_limits(EngineVariant::Neo, AircraftModel::A320);
        assert_eq!(neo_320, AircraftLimits::new(79000.0, 67400.0));

        let neo_321 = AircraftLimits::for_aircraft(EngineVariant::Neo, AircraftModel::A321);
        assert_eq!(neo_321, AircraftLimits::new(97000.0, 79200.0));
    }

    #[test]
    fn test_mlw_below_mtow_for_every_row() {
        for variant in EngineVariant::ALL {
            for model in AircraftModel::ALL {
                let limits = aircraft_limits(variant, model);
                assert!(limits.mlw < limits.mtow, "{variant} {model}");
            }
        }
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("CEO".parse::<EngineVariant>().unwrap(), EngineVariant::Ceo);
        assert_eq!(" neo ".parse::<EngineVariant>().unwrap(), EngineVariant::Neo);
        assert!("LEAP".parse::<EngineVariant>().is_err());
    }

    #[test]
    fn test_parse_model() {
        assert_eq!("a320".parse::<AircraftModel>().unwrap(), AircraftModel::A320);
        assert_eq!("321".parse::<AircraftModel>().unwrap(), AircraftModel::A321);
        let err = "A330".parse::<AircraftModel>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_MODEL");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&EngineVariant::Neo).unwrap(), "\"NEO\"");
        assert_eq!(serde_json::to_string(&AircraftModel::A321).unwrap(), "\"A321\"");

        let json = serde_json::to_string(&aircraft_limits(EngineVariant::Ceo, AircraftModel::A320)).unwrap();
        assert_eq!(json, r#"{"mtow":77000.0,"mlw":66000.0}"#);
    }

    #[test]
    fn test_aircraft_config() {
        let config = AircraftConfig::new(AircraftModel::A321, EngineVariant::Ceo);
        assert_eq!(config.name, "A321");
        assert_eq!(config.variant, EngineVariant::Ceo);
        assert_eq!(config.limits.mtow.0, 93500.0);
    }

    #[test]
    fn test_variant_display_name() {
        assert_eq!(EngineVariant::Ceo.display_name(), "CEO Engine");
        assert_eq!(EngineVariant::Neo.display_name(), "NEO Engine");
    }

    #[test]
    fn test_default_variant_is_ceo() {
        assert_eq!(EngineVariant::default(), EngineVariant::Ceo);
    }
}
