//! # tanker_core - Fuel Tankering Calculation Engine
//!
//! `tanker_core` works out fuel-tankering and weight figures for the A320 and
//! A321 (CEO and NEO engine options) and checks them against certified
//! takeoff and landing weight limits. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take an input snapshot and return results
//! - **Never blocks the operator**: Malformed numbers read as zero, limit
//!   breaches come back as flags rather than errors
//! - **Kilograms only**: Every figure is normalized to kilograms before arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use tanker_core::{calculate, AircraftModel, CalculatorInput, EngineVariant};
//!
//! let input = CalculatorInput {
//!     taxi: "0.2".to_string(),
//!     sector1: "9000".to_string(),
//!     zfw: "60000".to_string(),
//!     trip_plus_taxi: "9200".to_string(),
//!     ..CalculatorInput::default()
//! };
//!
//! let result = calculate(&input, AircraftModel::A320, EngineVariant::Ceo);
//! assert_eq!(result.tanker_fuel(), 9200);
//! assert_eq!(result.lwg(), 60000);
//! assert_eq!(result.mlw_delta(), -6000);
//! ```
//!
//! ## Modules
//!
//! - [`aircraft`] - Engine variants, models and the static limits table
//! - [`calculations`] - Panel input, weight calculation and limit evaluation
//! - [`dashboard`] - Two-panel workspace with a shared variant selection
//! - [`normalize`] - Tolerant decimal parsing and ton/kilogram disambiguation
//! - [`units`] - Type-safe mass units
//! - [`format`] - Display helpers for panel figures
//! - [`errors`] - Structured error types

pub mod aircraft;
pub mod calculations;
pub mod dashboard;
pub mod errors;
pub mod format;
pub mod normalize;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aircraft::{aircraft_limits, AircraftConfig, AircraftLimits, AircraftModel, EngineVariant};
pub use calculations::{calculate, CalculatorInput, InputField, PanelOutputs, PanelResult};
pub use dashboard::{Dashboard, DashboardSettings};
pub use errors::{CalcError, CalcResult};
