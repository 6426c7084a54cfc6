//! Fixed-point currency helpers.
//!
//! Every amount inside the engine is an integer number of tenths of a
//! display unit. Conversion happens only at the presentation edge.

pub const TENTHS_PER_UNIT: i64 = 10;

pub fn to_display(tenths: i64) -> f64 {
    tenths as f64 / TENTHS_PER_UNIT as f64
}

/// `"(cost neutral)"`, `"(+£0.5m)"` or `"(-£1.0m)"`.
pub fn impact_label(delta_tenths: i64) -> String {
    match delta_tenths {
        0 => "(cost neutral)".to_string(),
        d if d > 0 => format!("(+£{:.1}m)", to_display(d)),
        d => format!("(-£{:.1}m)", to_display(-d)),
    }
}
