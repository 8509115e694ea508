//! Result formatting

use crate::domain::conversion::ConversionRequest;

/// Number of decimals shown for a result unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Formats an input value the way the form echoes it back.
///
/// Whole numbers keep a trailing `.0` so `100` reads as `100.0`; anything
/// else uses the shortest representation that round-trips.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// `"{value} {from} = {result} {to}"` with `result` rounded to `precision`.
pub fn format_conversion(request: &ConversionRequest, result: f64, precision: usize) -> String {
    format!(
        "{} {} = {:.*} {}",
        format_value(request.value),
        request.from_unit,
        precision,
        result,
        request.to_unit
    )
}
