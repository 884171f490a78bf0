//! A node of the system network.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ConnectorId, ElementId, ElementShape, MepModel};

/// A node of the system network, as read from the host model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
  pub id: ElementId,
  pub category: String,
  /// Numeric parameters by name (e.g. `flow`), in the model's native units.
  #[serde(default)]
  pub attributes: BTreeMap<String, f64>,
  pub shape: ElementShape,
}

impl Element {
  pub fn new(id: impl Into<ElementId>, category: impl Into<String>, shape: ElementShape) -> Self {
    Self {
      id: id.into(),
      category: category.into(),
      attributes: BTreeMap::new(),
      shape,
    }
  }

  /// Instance with an (empty) mechanical model.
  pub fn instance(id: impl Into<ElementId>, category: impl Into<String>) -> Self {
    Self::new(
      id,
      category,
      ElementShape::Instance {
        mep_model: Some(MepModel::default()),
        host: None,
      },
    )
  }

  /// Rigid linear element with no connectors yet.
  pub fn rigid_curve(id: impl Into<ElementId>, category: impl Into<String>) -> Self {
    Self::new(id, category, ElementShape::RigidCurve { connectors: vec![] })
  }

  /// Flexible linear element with no connectors yet.
  pub fn flex_curve(id: impl Into<ElementId>, category: impl Into<String>) -> Self {
    Self::new(id, category, ElementShape::FlexCurve { connectors: vec![] })
  }

  pub fn with_attribute(mut self, name: impl Into<String>, value: f64) -> Self {
    self.attributes.insert(name.into(), value);
    self
  }

  /// Sets the host of an instance. Other shapes cannot be hosted and are left unchanged.
  pub fn hosted_by(mut self, host_id: impl Into<ElementId>) -> Self {
    if let ElementShape::Instance { host, .. } = &mut self.shape {
      *host = Some(host_id.into());
    }
    self
  }

  pub fn attribute(&self, name: &str) -> Option<f64> {
    self.attributes.get(name).copied()
  }

  pub fn is_category(&self, category: &str) -> bool {
    self.category == category
  }

  /// Element this one is hosted in, when the shape supports hosting.
  pub fn host_element(&self) -> Option<ElementId> {
    self.shape.host()
  }

  /// Registers `connector` in the element's connector collection. Returns false when
  /// the shape has nowhere to keep connectors.
  pub(crate) fn attach_connector(&mut self, connector: ConnectorId) -> bool {
    match self.shape.connectors_mut() {
      Some(list) => {
        if !list.contains(&connector) {
          list.push(connector);
        }
        true
      }
      None => false,
    }
  }
}
