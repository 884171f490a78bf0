//! Stable identifiers for elements and connectors of a system model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable integer identity of an element in the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

/// Identity of a connector. Unique across the whole model, not per owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorId(pub u64);

impl fmt::Display for ElementId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl fmt::Display for ConnectorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

impl From<i64> for ElementId {
  fn from(value: i64) -> Self {
    Self(value)
  }
}

impl From<u64> for ConnectorId {
  fn from(value: u64) -> Self {
    Self(value)
  }
}
