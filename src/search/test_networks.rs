//! Small builders for system networks used across the search tests.

use crate::types::{Connector, ConnectorId, ConnectorKind, Element, ElementId, SystemModel};

pub(crate) const SUPPLY_AIR: ElementId = ElementId(10_000);

pub(crate) struct NetworkBuilder {
  model: SystemModel,
  next_connector: u64,
}

impl NetworkBuilder {
  pub(crate) fn new() -> Self {
    Self {
      model: SystemModel::new(),
      next_connector: 1,
    }
  }

  /// Adds `ports` fresh end connectors to an element already in the model.
  pub(crate) fn ports(&mut self, owner: i64, ports: usize) -> Vec<ConnectorId> {
    (0..ports)
      .map(|_| {
        let id = ConnectorId(self.next_connector);
        self.next_connector += 1;
        self.model.insert_connector(Connector::new(id, owner));
        id
      })
      .collect()
  }

  pub(crate) fn duct(&mut self, id: i64, ports: usize) -> Vec<ConnectorId> {
    self.model.insert_element(Element::rigid_curve(id, "Ducts"));
    self.ports(id, ports)
  }

  pub(crate) fn flex_duct(&mut self, id: i64, ports: usize) -> Vec<ConnectorId> {
    self.model.insert_element(Element::flex_curve(id, "Flex Ducts"));
    self.ports(id, ports)
  }

  pub(crate) fn equipment(&mut self, id: i64, category: &str, ports: usize) -> Vec<ConnectorId> {
    self.model.insert_element(Element::instance(id, category));
    self.ports(id, ports)
  }

  /// Single-port air terminal; `flow` in cubic feet per second.
  pub(crate) fn terminal(&mut self, id: i64, flow: Option<f64>) -> ConnectorId {
    let mut e = Element::instance(id, "Air Terminals");
    if let Some(flow) = flow {
      e = e.with_attribute("flow", flow);
    }
    self.model.insert_element(e);
    self.ports(id, 1)[0]
  }

  pub(crate) fn element(&mut self, element: Element) {
    self.model.insert_element(element);
  }

  /// Joins two connectors inside the supply air system.
  pub(crate) fn link(&mut self, a: ConnectorId, b: ConnectorId) {
    assert!(self.model.connect(a, b, SUPPLY_AIR), "link {a} <-> {b}");
  }

  pub(crate) fn set_kind(&mut self, connector: ConnectorId, kind: ConnectorKind) {
    if let Some(c) = self.model.connector_mut(connector) {
      c.kind = kind;
    }
  }

  pub(crate) fn model_mut(&mut self) -> &mut SystemModel {
    &mut self.model
  }

  pub(crate) fn build(self) -> SystemModel {
    self.model
  }
}

/// Ids of the elements in a result list, in order.
pub(crate) fn ids(elements: &[&Element]) -> Vec<i64> {
  elements.iter().map(|e| e.id.0).collect()
}
