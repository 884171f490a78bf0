//! Resolve the connector collection of an element.

use tracing::instrument;

use crate::types::{ConnectorId, Element};

/// Returns the connectors of `element`, or `None` when its shape exposes none
/// (an instance without a mechanical model, or an element of any other shape).
#[instrument(level = "trace", skip(element), fields(element = %element.id))]
pub fn connectors_of(element: &Element) -> Option<&[ConnectorId]> {
  element.shape.connectors()
}
