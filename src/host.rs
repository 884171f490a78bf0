//! Read-only view of the host model the walker runs against.

use crate::error::HostError;
use crate::types::{Connector, ConnectorId, Element, ElementId};

/// Live state of a connector as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorState {
  /// System the connector currently belongs to.
  pub system: Option<ElementId>,
  pub is_connected: bool,
}

impl ConnectorState {
  /// A connector leads somewhere only when it is part of a system and connected.
  pub fn is_live(&self) -> bool {
    self.system.is_some() && self.is_connected
  }
}

/// Read access to elements and connectors of a host model.
///
/// Lookups borrow from the model, so everything the walker collects lives as long as
/// the model itself.
pub trait HostModel {
  fn element(&self, id: ElementId) -> Result<&Element, HostError>;

  fn connector(&self, id: ConnectorId) -> Result<&Connector, HostError>;

  /// Reads system membership and connection state of a connector. Hosts report
  /// [`HostError::InvalidOperation`] for connectors that cannot be inspected on their own.
  fn connector_state(&self, id: ConnectorId) -> Result<ConnectorState, HostError>;
}
