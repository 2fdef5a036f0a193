//! Number formatting for report lines.

/// Format an area with at most two decimals and no trailing zeros.
///
/// `42.30` renders as `42.3`, `80.0` as `80`.
#[must_use]
pub fn format_area(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
