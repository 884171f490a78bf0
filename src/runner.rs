//! One airflow run: look up the start element, search, aggregate, report.

use tracing::{info, instrument};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::host::HostModel;
use crate::report::AirflowReport;
use crate::search::{TerminalSearch, total_flow};
use crate::types::ElementId;

/// Runs a terminal search from `start` and aggregates the flow of what it finds.
///
/// Fails when `start` is not in the model or exposes no connectors. Abandoned
/// branches do not fail the run; they are listed in the report.
#[instrument(level = "trace", skip(model, config))]
pub fn run_airflow_search<M: HostModel + ?Sized>(
  model: &M,
  start: ElementId,
  config: &SearchConfig,
) -> Result<AirflowReport, SearchError> {
  let start_element = model
    .element(start)
    .map_err(|source| SearchError::UnknownStart {
      element: start,
      source,
    })?;
  let outcome = TerminalSearch::new(model, config).run(start_element)?;
  let aggregate = total_flow(&outcome.terminals, config);
  info!(
    %start,
    terminals = aggregate.count,
    total_airflow = aggregate.total,
    failures = outcome.failures.len(),
    "airflow search completed"
  );
  Ok(AirflowReport::new(start, config, &outcome, aggregate))
}
