//! A typed attachment point owned by one element.

use serde::{Deserialize, Serialize};

use super::{ConnectorId, ConnectorKind, ElementId};

/// A typed attachment point owned by exactly one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
  pub id: ConnectorId,
  pub owner: ElementId,
  #[serde(default)]
  pub kind: ConnectorKind,
  #[serde(default)]
  pub is_connected: bool,
  /// System the connector takes part in; `None` means the connector is inert.
  #[serde(default)]
  pub system: Option<ElementId>,
  /// Connectors paired with this one. May contain this connector itself or
  /// connectors of the same owner.
  #[serde(default)]
  pub all_refs: Vec<ConnectorId>,
}

impl Connector {
  /// A disconnected end connector with no peers.
  pub fn new(id: impl Into<ConnectorId>, owner: impl Into<ElementId>) -> Self {
    Self {
      id: id.into(),
      owner: owner.into(),
      kind: ConnectorKind::End,
      is_connected: false,
      system: None,
      all_refs: Vec::new(),
    }
  }

  pub fn with_kind(mut self, kind: ConnectorKind) -> Self {
    self.kind = kind;
    self
  }

  /// Adds `peer` to `all_refs` unless it is already present.
  pub fn add_ref(&mut self, peer: ConnectorId) {
    if !self.all_refs.contains(&peer) {
      self.all_refs.push(peer);
    }
  }
}
