//! Default Configuration
//!
//! Writes the default `config.yaml` the Educational System reads at runtime.
//! This tool only guarantees the file exists; it never parses or validates
//! its contents.

use std::fs;

use tracing::debug;

use crate::types::{PrepareError, Workspace, CONFIG_FILE};

/// The default configuration document, written verbatim when `config.yaml`
/// is absent. Two sections: knowledge-graph data paths and cache settings,
/// and the GNN model hyperparameters.
pub const DEFAULT_CONFIG_YAML: &str = r#"
knowledge_graph:
  concepts_file: "data/concepts.json"
  questions_file: "data/questions.json"
  resources_file: "data/resources.json"
  learners_file: "data/learners.json"
  cache_dir: "data/cache"
  max_cache_size_mb: 100

gnn:
  model_type: "hetero_gat"
  hidden_channels: 64
  num_layers: 2
  num_heads: 4
  dropout: 0.2
  learning_rate: 0.001
  weight_decay: 5e-4
  batch_size: 32
  patience: 10
  validation_ratio: 0.2
"#;

/// Ensure `config.yaml` exists in the workspace.
///
/// Writes the default document if the file is absent and leaves an existing
/// file untouched. Returns `true` if the file was created on this call.
pub fn ensure_config(ws: &Workspace) -> Result<bool, PrepareError> {
    let path = ws.config_file();
    if path.exists() {
        debug!(path = %path.display(), "config file already present");
        return Ok(false);
    }

    fs::write(&path, DEFAULT_CONFIG_YAML)
        .map_err(|e| PrepareError::io(format!("failed to write {}", CONFIG_FILE), e))?;
    debug!(path = %path.display(), "default config written");
    Ok(true)
}
