//! CLI: Find the air terminals reachable from one element of a system model and total
//! their airflow.
//!
//! Usage: `trace_airflow [OPTIONS] <model.json> <start-id>`
//! Example: trace_airflow tests/integration/two_branches.json 1
//!
//! Set RUST_LOG=hvac_airflow=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use hvac_airflow::config::{FLOW_ATTRIBUTE_ENV, TARGET_CATEGORY_ENV};
use hvac_airflow::{ElementId, SearchConfig, SearchError, model_io, run_airflow_search};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Find the air terminals reachable from one element and total their airflow.
#[derive(Parser, Debug)]
#[command(name = "trace_airflow")]
#[command(
  after_help = r#"Environment variables (override --category and --flow-attribute when set):
  AIRFLOW_TARGET_CATEGORY   Category of the elements to collect (default: Air Terminals).
  AIRFLOW_FLOW_ATTRIBUTE    Attribute holding each element's flow in ft³/s (default: flow).

Examples:
  trace_airflow model.json 1
  trace_airflow --json --category "Plumbing Fixtures" model.json 42"#
)]
struct Args {
  /// Category of the elements to collect. Overridden by AIRFLOW_TARGET_CATEGORY if set.
  #[arg(long, value_name = "NAME")]
  category: Option<String>,

  /// Attribute summed over the collected elements. Overridden by AIRFLOW_FLOW_ATTRIBUTE if set.
  #[arg(long, value_name = "NAME")]
  flow_attribute: Option<String>,

  /// Print the full report as JSON
  #[arg(long)]
  json: bool,

  /// Path to the system model JSON file
  #[arg(value_name = "model.json")]
  model_path: PathBuf,

  /// Id of the element to start from
  #[arg(value_name = "start-id", allow_negative_numbers = true)]
  start: i64,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let mut config = SearchConfig::default();
  if let Some(category) = env::var(TARGET_CATEGORY_ENV).ok().or(args.category.clone()) {
    config = config.with_target_category(category);
  }
  if let Some(attribute) = env::var(FLOW_ATTRIBUTE_ENV).ok().or(args.flow_attribute.clone()) {
    config = config.with_flow_attribute(attribute);
  }
  info!(?config, model = %args.model_path.display(), start = args.start, "trace_airflow starting");

  let model = match model_io::load_model(&args.model_path) {
    Ok(m) => m,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.model_path.display(), e);
      process::exit(1);
    }
  };

  let report = match run_airflow_search(&model, ElementId(args.start), &config) {
    Ok(r) => r,
    Err(SearchError::NoConnectorsFound { .. }) => {
      eprintln!(
        "Inappropriate element: an inappropriate element has been selected. Please select an element of an HVAC system."
      );
      process::exit(1);
    }
    Err(e) => {
      eprintln!("Search error: {}", e);
      process::exit(1);
    }
  };

  if args.json {
    match serde_json::to_string_pretty(&report) {
      Ok(json) => println!("{json}"),
      Err(e) => {
        eprintln!("Error writing report: {}", e);
        process::exit(1);
      }
    }
  } else {
    println!("{}", report.summary());
    for failure in &report.failures {
      println!("  skipped: {failure}");
    }
  }
}
