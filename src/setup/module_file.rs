//! Module File Installation
//!
//! The Streamlit app imports `gnn_education_system`, but the original script
//! arrives as `paste.txt`. Copy it under the importable name exactly once.

use std::fs;

use tracing::debug;

use crate::types::{PrepareError, Workspace, MODULE_FILE, SOURCE_FILE};

/// Outcome of a module-file installation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Installed {
    /// The module file was written from the source script on this run.
    Created,
    /// The module file was already present and left untouched.
    AlreadyPresent,
}

/// Install the importable module from the source script.
///
/// The source is read fully and written byte-for-byte to the module path.
/// An existing module file is treated as success without checking that its
/// contents still match the source.
pub fn install(ws: &Workspace) -> Result<Installed, PrepareError> {
    let source = ws.source_file();
    if !source.exists() {
        return Err(PrepareError::MissingSourceFile(SOURCE_FILE.to_string()));
    }

    let module = ws.module_file();
    if module.exists() {
        debug!(path = %module.display(), "module file already present");
        return Ok(Installed::AlreadyPresent);
    }

    let contents = fs::read_to_string(&source)
        .map_err(|e| PrepareError::io(format!("failed to read {}", SOURCE_FILE), e))?;
    fs::write(&module, &contents)
        .map_err(|e| PrepareError::io(format!("failed to write {}", MODULE_FILE), e))?;

    debug!(path = %module.display(), "module file created");
    Ok(Installed::Created)
}
