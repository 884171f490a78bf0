//! Closed set of element shapes that decide where an element keeps its connectors.

use serde::{Deserialize, Serialize};

use super::{ConnectorId, ElementId};

/// Embedded mechanical model of an instance (equipment, terminals, fittings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MepModel {
  #[serde(default)]
  pub connectors: Vec<ConnectorId>,
}

/// Shape of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementShape {
  /// Placed instance; connectors live in its mechanical model, if it has one.
  Instance {
    #[serde(default)]
    mep_model: Option<MepModel>,
    /// Element this instance is hosted in, if any.
    #[serde(default)]
    host: Option<ElementId>,
  },
  /// Flexible linear element (flex duct, wire).
  FlexCurve {
    #[serde(default)]
    connectors: Vec<ConnectorId>,
  },
  /// Rigid linear element (duct, pipe).
  RigidCurve {
    #[serde(default)]
    connectors: Vec<ConnectorId>,
  },
  /// Anything else. Exposes no connectors.
  Other,
}

impl ElementShape {
  /// Connector ids the shape lists, or `None` when it has no connector collection.
  pub fn connectors(&self) -> Option<&[ConnectorId]> {
    match self {
      ElementShape::Instance { mep_model, .. } => mep_model.as_ref().map(|m| m.connectors.as_slice()),
      ElementShape::FlexCurve { connectors } | ElementShape::RigidCurve { connectors } => {
        Some(connectors.as_slice())
      }
      ElementShape::Other => None,
    }
  }

  /// Mutable access to the connector collection, for building models.
  pub(crate) fn connectors_mut(&mut self) -> Option<&mut Vec<ConnectorId>> {
    match self {
      ElementShape::Instance { mep_model, .. } => mep_model.as_mut().map(|m| &mut m.connectors),
      ElementShape::FlexCurve { connectors } | ElementShape::RigidCurve { connectors } => {
        Some(connectors)
      }
      ElementShape::Other => None,
    }
  }

  /// Host relation; only instances can be hosted.
  pub fn host(&self) -> Option<ElementId> {
    match self {
      ElementShape::Instance { host, .. } => *host,
      _ => None,
    }
  }
}
