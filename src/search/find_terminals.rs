//! Depth-first search for target-category elements reachable through connectors.
//!
//! The walk keeps its own work stack instead of recursing, so long duct runs cannot
//! exhaust the thread stack. Frames are processed in the same order a recursive walk
//! would visit them, which keeps the discovery order pre-order.

use std::collections::HashSet;

use tracing::{debug, instrument, trace, warn};

use super::connectors::connectors_of;
use crate::config::SearchConfig;
use crate::error::{BranchFailure, HostError, SearchError};
use crate::host::HostModel;
use crate::types::{Connector, ConnectorId, Element, ElementId};

/// Pending work on the stack.
enum Frame<'m> {
  /// Connectors of one element, visited in order.
  Connectors { ids: &'m [ConnectorId], next: usize },
  /// Peers of a live connector, followed in order.
  Peers { connector: &'m Connector, next: usize },
}

/// Next unit of work taken off the top frame.
enum Step<'m> {
  Enter(ConnectorId),
  Follow(&'m Connector, ConnectorId),
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'m> {
  /// Matching elements in discovery order.
  pub terminals: Vec<&'m Element>,
  /// Branches that were abandoned along the way.
  pub failures: Vec<BranchFailure>,
  /// Number of distinct elements reached.
  pub visited: usize,
  /// Deepest the work stack grew.
  pub max_depth: usize,
}

/// One search session. Owns its visited set and result list; nothing is shared
/// between sessions.
pub struct TerminalSearch<'m, M: HostModel + ?Sized> {
  model: &'m M,
  target_category: String,
  visited: HashSet<ElementId>,
  reentered_hosts: HashSet<ElementId>,
  terminals: Vec<&'m Element>,
  failures: Vec<BranchFailure>,
  stack: Vec<Frame<'m>>,
  max_depth: usize,
}

impl<'m, M: HostModel + ?Sized> TerminalSearch<'m, M> {
  pub fn new(model: &'m M, config: &SearchConfig) -> Self {
    Self {
      model,
      target_category: config.target_category.clone(),
      visited: HashSet::new(),
      reentered_hosts: HashSet::new(),
      terminals: Vec::new(),
      failures: Vec::new(),
      stack: Vec::new(),
      max_depth: 0,
    }
  }

  /// Walks the network from `start`. Fails only when `start` exposes no connectors.
  #[instrument(level = "trace", skip_all, fields(start = %start.id))]
  pub fn run(mut self, start: &'m Element) -> Result<SearchOutcome<'m>, SearchError> {
    let ids = connectors_of(start).ok_or(SearchError::NoConnectorsFound { element: start.id })?;
    self.push(Frame::Connectors { ids, next: 0 });

    while let Some(step) = self.next_step() {
      match step {
        Step::Enter(id) => self.enter(id),
        Step::Follow(connector, peer) => self.follow(connector, peer),
      }
    }

    debug!(
      terminals = self.terminals.len(),
      visited = self.visited.len(),
      failures = self.failures.len(),
      "search finished"
    );
    Ok(SearchOutcome {
      terminals: self.terminals,
      failures: self.failures,
      visited: self.visited.len(),
      max_depth: self.max_depth,
    })
  }

  /// Drops exhausted frames and takes the next item off the top one.
  fn next_step(&mut self) -> Option<Step<'m>> {
    loop {
      match self.stack.last_mut()? {
        Frame::Connectors { ids, next } => {
          if let Some(&id) = ids.get(*next) {
            *next += 1;
            return Some(Step::Enter(id));
          }
        }
        Frame::Peers { connector, next } => {
          let connector: &'m Connector = *connector;
          if let Some(&peer) = connector.all_refs.get(*next) {
            *next += 1;
            return Some(Step::Follow(connector, peer));
          }
        }
      }
      self.stack.pop();
    }
  }

  fn push(&mut self, frame: Frame<'m>) {
    self.stack.push(frame);
    self.max_depth = self.max_depth.max(self.stack.len());
  }

  /// Reads a connector's live state and queues its peers when it leads somewhere.
  fn enter(&mut self, id: ConnectorId) {
    let model = self.model;
    let connector = match model.connector(id) {
      Ok(c) => c,
      Err(source) => {
        return self.record(BranchFailure::Traversal {
          connector: id,
          source,
        });
      }
    };
    match model.connector_state(id) {
      Ok(state) if state.is_live() => self.push(Frame::Peers { connector, next: 0 }),
      Ok(state) => trace!(connector = %id, ?state, "dead end"),
      Err(err) => self.recover(connector, err),
    }
  }

  /// Follows one peer of `connector`. A failure abandons the rest of its peers.
  fn follow(&mut self, connector: &'m Connector, peer: ConnectorId) {
    if let Err(err) = self.try_follow(connector, peer) {
      self.stack.pop();
      self.recover(connector, err);
    }
  }

  /// Pushes onto the stack only as its last, infallible step, so on error the top
  /// frame is still the peers of `connector`.
  fn try_follow(&mut self, connector: &'m Connector, peer: ConnectorId) -> Result<(), HostError> {
    let model = self.model;
    let peer = model.connector(peer)?;
    if !peer.kind.is_physical() || peer.owner == connector.owner {
      return Ok(());
    }
    if !self.visited.insert(peer.owner) {
      return Ok(());
    }

    let owner = model.element(peer.owner)?;
    if owner.is_category(&self.target_category) {
      debug!(element = %owner.id, category = %owner.category, "terminal found");
      self.terminals.push(owner);
    }
    if let Some(ids) = connectors_of(owner)
      && !ids.is_empty()
    {
      self.push(Frame::Connectors { ids, next: 0 });
    }
    Ok(())
  }

  fn recover(&mut self, connector: &'m Connector, err: HostError) {
    match err {
      HostError::InvalidOperation { .. } => self.reenter_through_host(connector.owner),
      source => self.record(BranchFailure::Traversal {
        connector: connector.id,
        source,
      }),
    }
  }

  /// Restarts the walk from the element hosting `element`, feeding the same visited
  /// set and result list. Each host is used as an entry point at most once.
  fn reenter_through_host(&mut self, element: ElementId) {
    match self.resolve_host(element) {
      Ok((host, ids)) => {
        if self.reentered_hosts.insert(host) {
          debug!(%element, %host, "re-entering through host element");
          self.push(Frame::Connectors { ids, next: 0 });
        } else {
          trace!(%element, %host, "host already re-entered");
        }
      }
      Err(reason) => self.record(BranchFailure::UnresolvableHost { element, reason }),
    }
  }

  fn resolve_host(&self, element: ElementId) -> Result<(ElementId, &'m [ConnectorId]), String> {
    let model = self.model;
    let hosted = model.element(element).map_err(|e| e.to_string())?;
    let host_id = hosted
      .host_element()
      .ok_or_else(|| "element is not hosted".to_string())?;
    let host = model.element(host_id).map_err(|e| e.to_string())?;
    let ids = connectors_of(host).ok_or_else(|| format!("host {host_id} exposes no connectors"))?;
    Ok((host_id, ids))
  }

  fn record(&mut self, failure: BranchFailure) {
    warn!(%failure, "branch abandoned");
    self.failures.push(failure);
  }
}

/// Finds every element of the configured target category reachable from `start`,
/// in discovery order.
pub fn find_terminals<'m, M: HostModel + ?Sized>(
  model: &'m M,
  start: &'m Element,
  config: &SearchConfig,
) -> Result<Vec<&'m Element>, SearchError> {
  TerminalSearch::new(model, config)
    .run(start)
    .map(|outcome| outcome.terminals)
}
