//! Text and JSON rendering of panel results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tanker_core::aircraft::{aircraft_limits, AircraftModel, EngineVariant};
use tanker_core::calculations::{BindingConstraint, PanelOutputs, PanelResult};
use tanker_core::format::{format_kg, format_signed_kg, tank_status_label, zfw_status_label};
use tanker_core::CalcResult;

/// JSON envelope written to stdout with `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub variant: EngineVariant,
    pub panels: Vec<PanelEntry<'a>>,
}

/// One panel: the full kilogram breakdown plus the integer figures shown.
#[derive(Debug, Serialize)]
pub struct PanelEntry<'a> {
    #[serde(flatten)]
    pub detail: &'a PanelResult,
    pub outputs: PanelOutputs,
}

pub fn json_report(variant: EngineVariant, panels: &[PanelResult]) -> CalcResult<String> {
    let report = Report {
        generated_at: Utc::now(),
        variant,
        panels: panels
            .iter()
            .map(|detail| PanelEntry {
                detail,
                outputs: detail.outputs(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn status_icon(exceeds: bool) -> &'static str {
    if exceeds { "[EXCEEDS]" } else { "[OK]" }
}

pub fn panel_text(result: &PanelResult) -> String {
    let w = &result.weights;
    let e = &result.evaluation;
    let binding = match e.binding_constraint() {
        BindingConstraint::Mtow => "MTOW",
        BindingConstraint::Mlw => "MLW",
    };

    let mut out = String::new();
    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!(
        "  {} {}   MTOW {}  MLW {}\n",
        result.model,
        result.variant,
        format_kg(result.limits.mtow.0),
        format_kg(result.limits.mlw.0)
    ));
    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!("  Tanker:       {:>8}\n", format_kg(w.tanker_fuel_kg.0)));
    out.push_str(&format!(
        "  TOW:          {:>8}  {}\n",
        format_kg(w.tow_kg.0),
        status_icon(e.tow_exceeds)
    ));
    out.push_str(&format!(
        "  Calc LWG:     {:>8}  {}  (delta {})\n",
        format_kg(w.lwg_kg.0),
        status_icon(e.lwg_exceeds),
        format_signed_kg(e.mlw_delta_kg.0)
    ));
    out.push_str(&format!(
        "  Tank Allowed: {:>8}  {} (by {}) {}\n",
        format_kg(e.tank_allowed_kg.0),
        status_icon(e.tank_exceeds),
        binding,
        tank_status_label(e.tank_exceeds)
    ));
    out.push_str(&format!(
        "  Delta Reduce ZFW: {} {}\n",
        format_kg(e.delta_reduce_zfw_kg.0),
        zfw_status_label(e.delta_reduce_zfw_kg.0)
    ));
    out
}

pub fn limits_table_text() -> String {
    let mut out = String::from("Variant  Model  MTOW (KG)  MLW (KG)\n");
    for variant in EngineVariant::ALL {
        for model in AircraftModel::ALL {
            let limits = aircraft_limits(variant, model);
            out.push_str(&format!(
                "{:<8} {:<6} {:>9}  {:>8}\n",
                variant.code(),
                model.code(),
                format_kg(limits.mtow.0),
                format_kg(limits.mlw.0)
            ));
        }
    }
    out
}
