//! # Dashboard
//!
//! The two-panel workspace: one A320 panel and one A321 panel, sharing a
//! single engine-variant selection.
//!
//! The dashboard only holds what the operator typed and which variant is
//! selected. Results are never stored; [`Dashboard::evaluate`] recomputes
//! them from the current snapshot every time.
//!
//! ## Structure
//!
//! ```text
//! Dashboard
//! ├── settings: DashboardSettings (selected engine variant)
//! ├── a320: CalculatorInput
//! └── a321: CalculatorInput
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::aircraft::{AircraftModel, EngineVariant};
//! use tanker_core::calculations::InputField;
//! use tanker_core::dashboard::Dashboard;
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.set_field(AircraftModel::A320, InputField::Zfw, "70000");
//! dashboard.set_field(AircraftModel::A320, InputField::Sector1, "8000");
//! assert!(dashboard.evaluate(AircraftModel::A320).tow_exceeds());
//!
//! // Switching to NEO raises MTOW for both panels
//! dashboard.set_variant(EngineVariant::Neo);
//! assert!(!dashboard.evaluate(AircraftModel::A320).tow_exceeds());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{AircraftConfig, AircraftModel, EngineVariant};
use crate::calculations::{calculate, CalculatorInput, InputField, PanelResult};
use crate::errors::CalcResult;

/// Settings shared by both panels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Engine variant selecting the limits row for every panel
    pub variant: EngineVariant,
}

/// Input state for both aircraft panels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub settings: DashboardSettings,
    pub a320: CalculatorInput,
    pub a321: CalculatorInput,
}

impl Dashboard {
    /// Empty dashboard with the CEO variant selected.
    pub fn new() -> Self {
        Dashboard::default()
    }

    /// Empty dashboard with the given variant selected.
    pub fn with_variant(variant: EngineVariant) -> Self {
        Dashboard {
            settings: DashboardSettings { variant },
            ..Dashboard::default()
        }
    }

    /// Currently selected engine variant
    pub fn variant(&self) -> EngineVariant {
        self.settings.variant
    }

    /// Select the engine variant for both panels. Inputs are kept.
    pub fn set_variant(&mut self, variant: EngineVariant) {
        if self.settings.variant != variant {
            debug!(from = %self.settings.variant, to = %variant, "engine variant changed");
        }
        self.settings.variant = variant;
    }

    /// Header configuration for a panel under the current variant
    pub fn config(&self, model: AircraftModel) -> AircraftConfig {
        AircraftConfig::new(model, self.settings.variant)
    }

    /// One panel's input snapshot
    pub fn panel(&self, model: AircraftModel) -> &CalculatorInput {
        match model {
            AircraftModel::A320 => &self.a320,
            AircraftModel::A321 => &self.a321,
        }
    }

    /// Mutable access to one panel's inputs
    pub fn panel_mut(&mut self, model: AircraftModel) -> &mut CalculatorInput {
        match model {
            AircraftModel::A320 => &mut self.a320,
            AircraftModel::A321 => &mut self.a321,
        }
    }

    /// Replace one field of one panel.
    pub fn set_field(&mut self, model: AircraftModel, field: InputField, value: impl Into<String>) {
        self.panel_mut(model).set(field, value);
    }

    /// Clear one panel's fields. The other panel is untouched.
    pub fn reset(&mut self, model: AircraftModel) {
        debug!(%model, "panel reset");
        self.panel_mut(model).reset();
    }

    /// Compute one panel under the current variant.
    pub fn evaluate(&self, model: AircraftModel) -> PanelResult {
        calculate(self.panel(model), model, self.settings.variant)
    }

    /// Compute both panels, A320 first.
    pub fn evaluate_all(&self) -> [PanelResult; 2] {
        AircraftModel::ALL.map(|model| self.evaluate(model))
    }

    /// Parse a dashboard snapshot from JSON. Missing sections default to empty.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot as pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
