//! # hvac-airflow
//!
//! Walks a mechanical system network from one element, collects every reachable air
//! terminal and totals their airflow.
//!
//! ## Architecture
//!
//! - [search]: the connector resolver, the depth-first terminal search and the flow
//!   aggregation.
//! - [host]: the read-only view of the host model the search runs against.
//! - [types]: elements, connectors and the in-memory [SystemModel] host.
//! - [runner]: one complete run producing an [AirflowReport].

pub mod config;
pub mod error;
pub mod host;
pub mod model_io;
pub mod report;
pub mod runner;
pub mod search;
pub mod types;

pub use config::SearchConfig;
pub use error::{BranchFailure, HostError, ModelError, SearchError};
pub use host::{ConnectorState, HostModel};
pub use report::AirflowReport;
pub use runner::run_airflow_search;
pub use search::{SearchOutcome, TerminalSearch, connectors_of, find_terminals, total_flow};
pub use types::{AggregateResult, Connector, ConnectorId, ConnectorKind, Element, ElementId, SystemModel};
