//! Display helpers for panel figures.
//!
//! Weights are shown as whole kilograms with no thousands separator, the
//! way they are read off a load sheet (`69200`, not `69,200`).

use crate::units::round_half_up;

/// Whole kilograms, no grouping (`69200`, `-6000`).
pub fn format_kg(value: f64) -> String {
    // `+ 0.0` turns a rounded -0 into 0 so it never prints as "-0"
    format!("{}", round_half_up(value) + 0.0)
}

/// Like [`format_kg`] but with a leading `+` on positive values.
pub fn format_signed_kg(value: f64) -> String {
    let rounded = round_half_up(value);
    if rounded > 0.0 {
        format!("+{}", format_kg(rounded))
    } else {
        format_kg(rounded)
    }
}

/// Caption under the ZFW reduction figure.
pub fn zfw_status_label(delta_reduce_zfw: f64) -> &'static str {
    if delta_reduce_zfw > 0.0 {
        "(Overweight)"
    } else {
        "(Under Limit)"
    }
}

/// Warning shown under the allowed tank figure.
pub fn tank_status_label(tank_exceeds: bool) -> &'static str {
    if tank_exceeds {
        "EXCEEDS LIMIT!"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(69200.0), "69200");
        assert_eq!(format_kg(-6000.0), "-6000");
        assert_eq!(format_kg(15199.5), "15200");
        assert_eq!(format_kg(0.0), "0");
        assert_eq!(format_kg(-0.3), "0");
        assert_eq!(format_kg(1234567.0), "1234567");
    }

    #[test]
    fn test_format_signed_kg() {
        assert_eq!(format_signed_kg(1200.0), "+1200");
        assert_eq!(format_signed_kg(0.0), "0");
        assert_eq!(format_signed_kg(0.4), "0");
        assert_eq!(format_signed_kg(-6000.0), "-6000");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(zfw_status_label(5000.0), "(Overweight)");
        assert_eq!(zfw_status_label(0.0), "(Under Limit)");
        assert_eq!(zfw_status_label(-6000.0), "(Under Limit)");
        assert_eq!(tank_status_label(true), "EXCEEDS LIMIT!");
        assert_eq!(tank_status_label(false), "");
    }
}
