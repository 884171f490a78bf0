//! Search configuration: which category to collect and which attribute to total.

use serde::{Deserialize, Serialize};

/// Category collected when nothing else is configured.
pub const DEFAULT_TARGET_CATEGORY: &str = "Air Terminals";

/// Attribute holding an element's flow, in cubic feet per second.
pub const DEFAULT_FLOW_ATTRIBUTE: &str = "flow";

/// Env var overriding [`SearchConfig::target_category`] in the CLI.
pub const TARGET_CATEGORY_ENV: &str = "AIRFLOW_TARGET_CATEGORY";

/// Env var overriding [`SearchConfig::flow_attribute`] in the CLI.
pub const FLOW_ATTRIBUTE_ENV: &str = "AIRFLOW_FLOW_ATTRIBUTE";

/// Options for a terminal search and its aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Exact category name of the elements to collect.
  pub target_category: String,
  /// Name of the attribute summed by [`total_flow`](crate::search::total_flow).
  pub flow_attribute: String,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      target_category: DEFAULT_TARGET_CATEGORY.to_string(),
      flow_attribute: DEFAULT_FLOW_ATTRIBUTE.to_string(),
    }
  }
}

impl SearchConfig {
  pub fn with_target_category(mut self, category: impl Into<String>) -> Self {
    self.target_category = category.into();
    self
  }

  pub fn with_flow_attribute(mut self, attribute: impl Into<String>) -> Self {
    self.flow_attribute = attribute.into();
    self
  }
}
