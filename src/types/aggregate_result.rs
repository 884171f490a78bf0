//! Aggregated flow over a set of terminals.

use serde::{Deserialize, Serialize};

/// Aggregated flow over a set of terminals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
  /// Total flow in litres per second, rounded to 3 digits.
  pub total: f64,
  /// Number of contributing elements.
  pub count: usize,
}

impl AggregateResult {
  pub fn empty() -> Self {
    Self {
      total: 0.0,
      count: 0,
    }
  }
}
