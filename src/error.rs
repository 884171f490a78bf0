//! Error types for model access, model integrity and terminal search.

use thiserror::Error;

use crate::types::{ConnectorId, ElementId};

/// Failure reported by the host model while reading an element or connector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
  /// The element cannot be queried on its own (e.g. it is hosted inside another element).
  #[error("element {element} cannot be queried directly")]
  InvalidOperation { element: ElementId },

  #[error("unknown element {0}")]
  UnknownElement(ElementId),

  #[error("unknown connector {0}")]
  UnknownConnector(ConnectorId),

  #[error("host failure on element {element}: {message}")]
  Fault { element: ElementId, message: String },
}

/// A branch of the walk that was abandoned. Recorded, never propagated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BranchFailure {
  /// Re-entry through the host element was needed but no usable host was found.
  #[error("no usable host element for {element}: {reason}")]
  UnresolvableHost { element: ElementId, reason: String },

  /// Any other host failure while visiting a connector.
  #[error("walk through connector {connector} failed: {source}")]
  Traversal {
    connector: ConnectorId,
    #[source]
    source: HostError,
  },
}

/// Errors that stop a terminal search before it starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
  #[error("element {element} exposes no connectors")]
  NoConnectorsFound { element: ElementId },

  #[error("start element {element} is not available: {source}")]
  UnknownStart {
    element: ElementId,
    #[source]
    source: HostError,
  },
}

/// Referential integrity violations in a [`SystemModel`](crate::types::SystemModel).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
  #[error("duplicate element id {0}")]
  DuplicateElement(ElementId),

  #[error("duplicate connector id {0}")]
  DuplicateConnector(ConnectorId),

  #[error("connector {connector} is owned by unknown element {owner}")]
  OrphanConnector {
    connector: ConnectorId,
    owner: ElementId,
  },

  #[error("connector {connector} references unknown connector {peer}")]
  DanglingReference {
    connector: ConnectorId,
    peer: ConnectorId,
  },

  #[error("connector {connector} is not listed by its owner {owner}")]
  UnlistedConnector {
    connector: ConnectorId,
    owner: ElementId,
  },

  #[error("element {element} lists unknown connector {connector}")]
  MissingConnector {
    element: ElementId,
    connector: ConnectorId,
  },

  #[error("element {element} lists connector {connector} owned by element {owner}")]
  ForeignConnector {
    element: ElementId,
    connector: ConnectorId,
    owner: ElementId,
  },

  #[error("element {element} is hosted by unknown element {host}")]
  UnknownHost { element: ElementId, host: ElementId },

  #[error("fault registered for unknown element {0}")]
  UnknownFaultTarget(ElementId),
}
