//! In-memory system model: elements, connectors and injected host faults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Connector, ConnectorId, Element, ElementId};
use crate::error::{HostError, ModelError};
use crate::host::{ConnectorState, HostModel};

/// How the host misbehaves when an element is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostFault {
  /// Connector state of the element cannot be read directly (hosted sub-element).
  InvalidOperation,
  /// Any lookup of the element fails.
  Failure { message: String },
}

/// One fault entry in the file form of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultEntry {
  pub element: ElementId,
  #[serde(flatten)]
  pub fault: HostFault,
}

/// Serialized form of [`SystemModel`]: flat lists, checked on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemModelFile {
  #[serde(default)]
  pub elements: Vec<Element>,
  #[serde(default)]
  pub connectors: Vec<Connector>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub faults: Vec<FaultEntry>,
}

/// In-memory host model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SystemModelFile", into = "SystemModelFile")]
pub struct SystemModel {
  elements: BTreeMap<ElementId, Element>,
  connectors: BTreeMap<ConnectorId, Connector>,
  faults: BTreeMap<ElementId, HostFault>,
}

impl SystemModel {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or replaces an element. Connectors already in the model that name it as
  /// owner are registered with it, so insertion order does not matter.
  pub fn insert_element(&mut self, mut element: Element) -> Option<Element> {
    let id = element.id;
    for c in self.connectors.values().filter(|c| c.owner == id) {
      element.attach_connector(c.id);
    }
    self.elements.insert(element.id, element)
  }

  /// Inserts or replaces a connector and registers it with its owner, if present.
  pub fn insert_connector(&mut self, connector: Connector) -> Option<Connector> {
    if let Some(owner) = self.elements.get_mut(&connector.owner) {
      owner.attach_connector(connector.id);
    }
    self.connectors.insert(connector.id, connector)
  }

  /// Pairs two connectors in both directions and puts them in `system`.
  pub fn connect(&mut self, a: ConnectorId, b: ConnectorId, system: ElementId) -> bool {
    if !self.connectors.contains_key(&a) || !self.connectors.contains_key(&b) {
      return false;
    }
    for (this, other) in [(a, b), (b, a)] {
      if let Some(c) = self.connectors.get_mut(&this) {
        c.is_connected = true;
        c.system = Some(system);
        c.add_ref(other);
      }
    }
    true
  }

  pub fn inject_fault(&mut self, element: ElementId, fault: HostFault) {
    self.faults.insert(element, fault);
  }

  pub fn connector_mut(&mut self, id: ConnectorId) -> Option<&mut Connector> {
    self.connectors.get_mut(&id)
  }

  pub fn elements(&self) -> impl Iterator<Item = &Element> {
    self.elements.values()
  }

  pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
    self.connectors.values()
  }

  pub fn element_count(&self) -> usize {
    self.elements.len()
  }

  pub fn fault(&self, element: ElementId) -> Option<&HostFault> {
    self.faults.get(&element)
  }

  /// Checks that every id the model mentions resolves, and that connector ownership
  /// agrees in both directions.
  #[instrument(level = "trace", skip(self))]
  pub fn validate(&self) -> Result<(), ModelError> {
    for c in self.connectors.values() {
      if !self.elements.contains_key(&c.owner) {
        return Err(ModelError::OrphanConnector {
          connector: c.id,
          owner: c.owner,
        });
      }
      if let Some(peer) = c.all_refs.iter().find(|p| !self.connectors.contains_key(*p)) {
        return Err(ModelError::DanglingReference {
          connector: c.id,
          peer: *peer,
        });
      }
    }
    for e in self.elements.values() {
      for id in e.shape.connectors().unwrap_or_default() {
        let Some(c) = self.connectors.get(id) else {
          return Err(ModelError::MissingConnector {
            element: e.id,
            connector: *id,
          });
        };
        if c.owner != e.id {
          return Err(ModelError::ForeignConnector {
            element: e.id,
            connector: *id,
            owner: c.owner,
          });
        }
      }
      if let Some(host) = e.host_element()
        && !self.elements.contains_key(&host)
      {
        return Err(ModelError::UnknownHost {
          element: e.id,
          host,
        });
      }
    }
    for c in self.connectors.values() {
      let listed = self
        .elements
        .get(&c.owner)
        .and_then(|owner| owner.shape.connectors())
        .is_some_and(|ids| ids.contains(&c.id));
      if !listed {
        return Err(ModelError::UnlistedConnector {
          connector: c.id,
          owner: c.owner,
        });
      }
    }
    if let Some(id) = self.faults.keys().find(|id| !self.elements.contains_key(*id)) {
      return Err(ModelError::UnknownFaultTarget(*id));
    }
    Ok(())
  }

  fn failure_for(&self, element: ElementId) -> Option<HostError> {
    match self.faults.get(&element)? {
      HostFault::Failure { message } => Some(HostError::Fault {
        element,
        message: message.clone(),
      }),
      HostFault::InvalidOperation => None,
    }
  }
}

impl HostModel for SystemModel {
  fn element(&self, id: ElementId) -> Result<&Element, HostError> {
    if let Some(err) = self.failure_for(id) {
      return Err(err);
    }
    self.elements.get(&id).ok_or(HostError::UnknownElement(id))
  }

  fn connector(&self, id: ConnectorId) -> Result<&Connector, HostError> {
    self.connectors.get(&id).ok_or(HostError::UnknownConnector(id))
  }

  fn connector_state(&self, id: ConnectorId) -> Result<ConnectorState, HostError> {
    let c = self.connector(id)?;
    match self.faults.get(&c.owner) {
      Some(HostFault::InvalidOperation) => {
        return Err(HostError::InvalidOperation { element: c.owner });
      }
      Some(HostFault::Failure { message }) => {
        return Err(HostError::Fault {
          element: c.owner,
          message: message.clone(),
        });
      }
      None => {}
    }
    Ok(ConnectorState {
      system: c.system,
      is_connected: c.is_connected,
    })
  }
}

impl TryFrom<SystemModelFile> for SystemModel {
  type Error = ModelError;

  fn try_from(file: SystemModelFile) -> Result<Self, Self::Error> {
    let mut model = SystemModel::new();
    for e in file.elements {
      let id = e.id;
      if model.elements.insert(id, e).is_some() {
        return Err(ModelError::DuplicateElement(id));
      }
    }
    for c in file.connectors {
      let id = c.id;
      if model.connectors.insert(id, c).is_some() {
        return Err(ModelError::DuplicateConnector(id));
      }
    }
    for f in file.faults {
      model.faults.insert(f.element, f.fault);
    }
    model.validate()?;
    Ok(model)
  }
}

impl From<SystemModel> for SystemModelFile {
  fn from(model: SystemModel) -> Self {
    SystemModelFile {
      elements: model.elements.into_values().collect(),
      connectors: model.connectors.into_values().collect(),
      faults: model
        .faults
        .into_iter()
        .map(|(element, fault)| FaultEntry { element, fault })
        .collect(),
    }
  }
}
