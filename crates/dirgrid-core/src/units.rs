//! KB/byte conversions for the size filters.
//!
//! Users type sizes in kilobytes; the listing service filters in bytes.
//! Both directions round to two decimal places.

/// Bytes in one kilobyte.
pub const BYTES_PER_KB: f64 = 1024.0;

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a user-facing KB value to bytes.
pub fn kb_to_bytes(kb: f64) -> f64 {
    round2(kb * BYTES_PER_KB)
}

/// Convert a byte count to KB for display.
pub fn bytes_to_kb(bytes: f64) -> f64 {
    round2(bytes / BYTES_PER_KB)
}

/// Parse raw numeric filter input.
///
/// Blank input clears the filter. Anything else that fails to parse is
/// coerced to NaN rather than rejected.
pub fn parse_kb_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}
