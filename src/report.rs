//! Serializable summary of one airflow search.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::search::SearchOutcome;
use crate::types::{AggregateResult, ElementId};

/// Report format version.
pub const REPORT_VERSION: u32 = 1;

/// Summary of one airflow search, as printed by the CLI with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirflowReport {
  pub version: u32,
  pub start: ElementId,
  pub target_category: String,
  /// Terminal ids in discovery order.
  pub terminals: Vec<ElementId>,
  pub terminal_count: usize,
  /// Total airflow in L/s.
  pub total_airflow: f64,
  pub visited_elements: usize,
  pub max_depth: usize,
  /// Abandoned branches, as messages.
  pub failures: Vec<String>,
  /// RFC 3339 time the report was built.
  pub generated_at: String,
}

impl AirflowReport {
  /// Builds a report from a finished search and its aggregate.
  pub fn new(
    start: ElementId,
    config: &SearchConfig,
    outcome: &SearchOutcome<'_>,
    aggregate: AggregateResult,
  ) -> Self {
    Self {
      version: REPORT_VERSION,
      start,
      target_category: config.target_category.clone(),
      terminals: outcome.terminals.iter().map(|e| e.id).collect(),
      terminal_count: aggregate.count,
      total_airflow: aggregate.total,
      visited_elements: outcome.visited,
      max_depth: outcome.max_depth,
      failures: outcome.failures.iter().map(|f| f.to_string()).collect(),
      generated_at: chrono::Utc::now().to_rfc3339(),
    }
  }

  /// Two-line summary for terminal output.
  pub fn summary(&self) -> String {
    format!(
      "No of air terminals: {}\nTotal airflow: {} L/S",
      self.terminal_count, self.total_airflow
    )
  }
}

#[cfg(test)]
mod tests {
  use super::{AirflowReport, REPORT_VERSION};
  use crate::config::SearchConfig;
  use crate::error::BranchFailure;
  use crate::search::SearchOutcome;
  use crate::types::{AggregateResult, Element, ElementId};

  fn report() -> AirflowReport {
    let a = Element::instance(20, "Air Terminals");
    let b = Element::instance(21, "Air Terminals");
    let outcome = SearchOutcome {
      terminals: vec![&a, &b],
      failures: vec![BranchFailure::UnresolvableHost {
        element: ElementId(5),
        reason: "element is not hosted".to_string(),
      }],
      visited: 6,
      max_depth: 9,
    };
    AirflowReport::new(
      ElementId(1),
      &SearchConfig::default(),
      &outcome,
      AggregateResult {
        total: 56.634,
        count: 2,
      },
    )
  }

  #[test]
  fn report_collects_outcome() {
    let r = report();
    assert_eq!(r.version, REPORT_VERSION);
    assert_eq!(r.terminals, vec![ElementId(20), ElementId(21)]);
    assert_eq!(r.terminal_count, 2);
    assert_eq!(r.visited_elements, 6);
    assert_eq!(r.max_depth, 9);
    assert_eq!(r.failures.len(), 1);
    assert!(r.failures[0].contains("not hosted"));
    assert!(chrono::DateTime::parse_from_rfc3339(&r.generated_at).is_ok());
  }

  #[test]
  fn report_serializes_to_json() {
    let r = report();
    let json = serde_json::to_string(&r).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["start"], 1);
    assert_eq!(parsed["target_category"], "Air Terminals");
    assert_eq!(parsed["terminals"], serde_json::json!([20, 21]));
    assert_eq!(parsed["total_airflow"], 56.634);
  }

  #[test]
  fn summary_lines() {
    assert_eq!(
      report().summary(),
      "No of air terminals: 2\nTotal airflow: 56.634 L/S"
    );
  }
}
