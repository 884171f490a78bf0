//! Total the flow of collected terminals.

use tracing::instrument;

use crate::config::SearchConfig;
use crate::types::{AggregateResult, Element};

/// Cubic feet to litres.
pub const CUBIC_FEET_TO_LITRES: f64 = 28.31684;

/// Decimal digits kept in the reported total.
pub const FLOW_DIGITS: i32 = 3;

/// Magnitude from which a double has no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e16;

/// Rounds to `digits` decimals, ties to even. Values of magnitude 1e16 or more, and NaN,
/// are returned unchanged.
pub fn round_half_even(value: f64, digits: i32) -> f64 {
  if value.is_nan() || value.abs() >= ROUNDING_LIMIT {
    return value;
  }
  let factor = 10f64.powi(digits);
  (value * factor).round_ties_even() / factor
}

/// Sums the flow attribute of `terminals` (missing counts as 0), converts the total to
/// litres per second and rounds it to [`FLOW_DIGITS`] decimals.
#[instrument(level = "trace", skip(terminals, config), fields(count = terminals.len()))]
pub fn total_flow(terminals: &[&Element], config: &SearchConfig) -> AggregateResult {
  let native: f64 = terminals
    .iter()
    .map(|e| e.attribute(&config.flow_attribute).unwrap_or(0.0))
    .sum();
  AggregateResult {
    total: round_half_even(native * CUBIC_FEET_TO_LITRES, FLOW_DIGITS),
    count: terminals.len(),
  }
}
