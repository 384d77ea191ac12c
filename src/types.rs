//! Edulaunch - Type Definitions
//!
//! Shared types for the bootstrap-and-launch tool: the workspace handle
//! with its fixed artifact paths, and the error kinds each phase can report.

use std::path::{Path, PathBuf};

use thiserror::Error;

// ─── Fixed artifact names ────────────────────────────────────────

/// The loosely-named source script dropped into the working directory.
pub const SOURCE_FILE: &str = "paste.txt";

/// The importable module name the Streamlit app expects.
pub const MODULE_FILE: &str = "gnn_education_system.py";

/// Directory for knowledge-graph data files and the cache.
pub const DATA_DIR: &str = "data";

/// Default configuration file consumed by the application (not by this tool).
pub const CONFIG_FILE: &str = "config.yaml";

/// The Streamlit entry point handed to the external tool.
pub const ENTRY_POINT: &str = "app.py";

// ─── Workspace ───────────────────────────────────────────────────

/// The working directory every preparation and launch step operates on.
///
/// All paths are derived from the root so the whole sequence can run
/// against a scratch directory in tests.
#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_file(&self) -> PathBuf {
        self.root.join(SOURCE_FILE)
    }

    pub fn module_file(&self) -> PathBuf {
        self.root.join(MODULE_FILE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn entry_point(&self) -> PathBuf {
        self.root.join(ENTRY_POINT)
    }
}

// ─── Errors ──────────────────────────────────────────────────────

/// Failures the preparation phase can report.
///
/// Every variant is printed once at top level as a human-readable message;
/// there is no machine-readable error surface.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("original script ({0}) not found")]
    MissingSourceFile(String),

    #[error("missing required packages: {}", .0.join(", "))]
    MissingDependencies(Vec<String>),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PrepareError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Failures the launch phase can report.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{0} not found")]
    MissingEntryPoint(String),

    #[error("failed to invoke streamlit: {0}")]
    Io(#[from] std::io::Error),
}
