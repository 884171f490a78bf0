//! Load and save system models as JSON.

use crate::types::SystemModel;
use std::path::Path;
use tracing::instrument;

/// Loads a model from `path`. Missing files, invalid JSON and models that fail
/// [`SystemModel::validate`] are all errors.
#[instrument(level = "trace", skip(path), fields(path = %path.display()))]
pub fn load_model(path: &Path) -> Result<SystemModel, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Saves `model` to `path` as pretty JSON, creating parent directories if needed.
#[instrument(level = "trace", skip(path, model), fields(path = %path.display()))]
pub fn save_model(path: &Path, model: &SystemModel) -> Result<(), std::io::Error> {
  let json = serde_json::to_string_pretty(model)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)
}
