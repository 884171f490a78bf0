//! Data model of a mechanical system network: elements, connectors and the in-memory
//! host model they live in.

mod aggregate_result;
mod connector;
mod connector_kind;
mod element;
mod element_shape;
mod ids;
mod system_model;

pub use aggregate_result::AggregateResult;
pub use connector::Connector;
pub use connector_kind::ConnectorKind;
pub use element::Element;
pub use element_shape::{ElementShape, MepModel};
pub use ids::{ConnectorId, ElementId};
pub use system_model::{FaultEntry, HostFault, SystemModel, SystemModelFile};
