//! Prediction table cells

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading decimal number, optionally signed and with an exponent
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Completion percentage of a prediction cell
///
/// The backend reports either a probability in [0, 1] or a percentage.
/// The leading number of the cell is read, so `"85%"` and `"87 (high)"`
/// both work. Values up to 1 are scaled to percent; the result is rounded
/// to the nearest integer. Cells that do not start with a number read as 0.
pub fn completion_percent(cell: &str) -> u32 {
    let value = match leading_number(cell) {
        Some(v) => v,
        None => return 0,
    };
    let percent = if value <= 1.0 { value * 100.0 } else { value };
    percent.round().max(0.0) as u32
}

fn leading_number(cell: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(cell.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
