//! # Input Normalization
//!
//! Turns the free-form strings typed into a calculator panel into kilogram
//! figures.
//!
//! Parsing is tolerant: a comma works as the decimal separator, trailing
//! garbage after a number is ignored, and anything that isn't a number at
//! all reads as zero. An empty or half-typed field means "not entered yet",
//! so nothing here ever returns an error.
//!
//! Two fields carry an implicit unit:
//!
//! - **Taxi fuel** is conventionally entered in tons (`0.2`), but a figure in
//!   kilograms (`200`) is also accepted. Anything strictly between 0 and 10
//!   is taken as tons.
//! - **Structural limits** below 1000 are taken as tons. The built-in table
//!   is already in kilograms so this only matters for externally supplied
//!   limits.
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::normalize::{normalize_taxi_to_kg, parse_decimal};
//!
//! assert_eq!(parse_decimal("0,2"), 0.2);
//! assert_eq!(normalize_taxi_to_kg(parse_decimal("0,2")).0, 200.0);
//! assert_eq!(normalize_taxi_to_kg(parse_decimal("10")).0, 10.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aircraft::AircraftLimits;
use crate::calculations::CalculatorInput;
use crate::units::{Kilograms, Tons};

/// Taxi values strictly below this magnitude (and above zero) are tons.
pub const TAXI_TONS_THRESHOLD: f64 = 10.0;

/// Limit values below this magnitude are tons.
pub const LIMIT_TONS_THRESHOLD: f64 = 1000.0;

/// Largest magnitude a single input may carry. Seven fields at this bound
/// still sum to a finite, exactly representable whole number of kilograms.
pub const MAX_INPUT_MAGNITUDE: f64 = 1e12;

/// Parse a decimal string the way an operator types it.
///
/// The first comma is read as a decimal point, leading whitespace is
/// skipped, and the longest numeric prefix is used (`"12abc"` reads as 12).
/// Empty, unparsable or non-finite input reads as `0.0`. Magnitudes beyond
/// [`MAX_INPUT_MAGNITUDE`] are clamped to it, keeping the sign.
pub fn parse_decimal(text: &str) -> f64 {
    let normalized = text.replacen(',', ".", 1);
    let candidate = numeric_prefix(normalized.trim_start());

    let value = match candidate.parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v.clamp(-MAX_INPUT_MAGNITUDE, MAX_INPUT_MAGNITUDE),
        _ => 0.0,
    };

    if value == 0.0 && !text.trim().is_empty() {
        trace!(input = text, "decimal input read as zero");
    }
    value
}

/// Longest prefix of `s` that forms a decimal literal:
/// `[sign] digits [. digits] [(e|E) [sign] digits]`, with at least one digit
/// in the mantissa. Returns an empty slice when there is none.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    // Exponent only counts when it has digits of its own
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Convert a parsed taxi-fuel figure to kilograms.
///
/// `0 < raw < 10` is tons and gets multiplied by 1000. Zero, negatives and
/// anything `>= 10` are already kilograms. A taxi entry of exactly `10` is
/// therefore 10 kg.
pub fn normalize_taxi_to_kg(raw: f64) -> Kilograms {
    if raw > 0.0 && raw < TAXI_TONS_THRESHOLD {
        trace!(raw, "taxi fuel read as tons");
        Tons(raw).into()
    } else {
        Kilograms(raw)
    }
}

/// Convert a structural limit to kilograms.
///
/// Anything below 1000 is tons and gets multiplied by 1000. The magnitude is
/// clamped to [`MAX_INPUT_MAGNITUDE`] like typed input.
pub fn normalize_limit_to_kg(raw: f64) -> Kilograms {
    let raw = raw.clamp(-MAX_INPUT_MAGNITUDE, MAX_INPUT_MAGNITUDE);
    if raw < LIMIT_TONS_THRESHOLD {
        trace!(raw, "limit read as tons");
        Tons(raw).into()
    } else {
        Kilograms(raw)
    }
}

/// Apply [`normalize_limit_to_kg`] to both limits.
pub fn normalize_limits(limits: &AircraftLimits) -> AircraftLimits {
    AircraftLimits {
        mtow: normalize_limit_to_kg(limits.mtow.0),
        mlw: normalize_limit_to_kg(limits.mlw.0),
    }
}

/// A calculator input snapshot with every field in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedInput {
    /// Taxi fuel after the tons/kilograms heuristic
    pub taxi: Kilograms,
    pub sector4: Kilograms,
    pub sector3: Kilograms,
    pub sector2: Kilograms,
    pub sector1: Kilograms,
    /// Zero Fuel Weight
    pub zfw: Kilograms,
    /// First-sector trip fuel plus taxi burn
    pub trip_plus_taxi: Kilograms,
}

impl NormalizedInput {
    /// Normalize a raw input snapshot.
    ///
    /// Only taxi fuel goes through the unit heuristic; every other field is
    /// taken as kilograms as typed.
    pub fn from_input(input: &CalculatorInput) -> Self {
        NormalizedInput {
            taxi: normalize_taxi_to_kg(parse_decimal(&input.taxi)),
            sector4: Kilograms(parse_decimal(&input.sector4)),
            sector3: Kilograms(parse_decimal(&input.sector3)),
            sector2: Kilograms(parse_decimal(&input.sector2)),
            sector1: Kilograms(parse_decimal(&input.sector1)),
            zfw: Kilograms(parse_decimal(&input.zfw)),
            trip_plus_taxi: Kilograms(parse_decimal(&input.trip_plus_taxi)),
        }
    }
}
