//! Connection kind of a connector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection kind of a connector.
///
/// Only [`End`](ConnectorKind::End), [`Curve`](ConnectorKind::Curve) and
/// [`Physical`](ConnectorKind::Physical) denote a real geometric joint; every other
/// kind is ignored when walking a network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
  #[default]
  End,
  Curve,
  Physical,
  Reference,
  NonEnd,
  Node,
  Logical,
  MasterSurface,
  MasterCurve,
  BlankConnector,
  Invalid,
}

impl ConnectorKind {
  /// Returns true for the kinds that join two elements physically.
  pub fn is_physical(self) -> bool {
    matches!(
      self,
      ConnectorKind::End | ConnectorKind::Curve | ConnectorKind::Physical
    )
  }
}

impl fmt::Display for ConnectorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConnectorKind::End => write!(f, "end"),
      ConnectorKind::Curve => write!(f, "curve"),
      ConnectorKind::Physical => write!(f, "physical"),
      ConnectorKind::Reference => write!(f, "reference"),
      ConnectorKind::NonEnd => write!(f, "non_end"),
      ConnectorKind::Node => write!(f, "node"),
      ConnectorKind::Logical => write!(f, "logical"),
      ConnectorKind::MasterSurface => write!(f, "master_surface"),
      ConnectorKind::MasterCurve => write!(f, "master_curve"),
      ConnectorKind::BlankConnector => write!(f, "blank_connector"),
      ConnectorKind::Invalid => write!(f, "invalid"),
    }
  }
}
