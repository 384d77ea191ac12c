//! Setup Module
//!
//! The preparation phase: module-file installation, data directory and
//! default config creation, and runtime dependency checks.

pub mod dependencies;
pub mod environment;
pub mod module_file;

use std::fs;

use colored::Colorize;
use tracing::info;

use crate::config::ensure_config;
use crate::types::{PrepareError, Workspace, CONFIG_FILE, DATA_DIR, MODULE_FILE};

use dependencies::{check_packages, INSTALL_HINT};
use environment::{detect_interpreter, INTERPRETER_CANDIDATES};
use module_file::{install, Installed};

/// Run the full preparation sequence against the workspace.
///
/// Each step is idempotent: a second run finds every artifact in place and
/// changes nothing. Filesystem steps run before the dependency check, so a
/// missing package leaves the already-created artifacts on disk.
pub fn prepare(ws: &Workspace, packages: &[&str]) -> Result<(), PrepareError> {
    // ---- 1. Module file -----------------------------------------------------
    println!("{}", "  [1/4] Installing module file...".cyan());
    match install(ws)? {
        Installed::Created => {
            println!("{}", format!("  Created {}", MODULE_FILE).green());
        }
        Installed::AlreadyPresent => {
            println!(
                "{}",
                format!("  {} already exists", MODULE_FILE).green()
            );
        }
    }

    // ---- 2. Data directory --------------------------------------------------
    println!("{}", "  [2/4] Ensuring data directory...".cyan());
    fs::create_dir_all(ws.data_dir())
        .map_err(|e| PrepareError::io(format!("failed to create {}", DATA_DIR), e))?;
    println!("{}", format!("  {}/ ready", DATA_DIR).green());

    // ---- 3. Default config --------------------------------------------------
    println!("{}", "  [3/4] Ensuring configuration...".cyan());
    if ensure_config(ws)? {
        println!("{}", format!("  Created default {}", CONFIG_FILE).green());
    } else {
        println!("{}", format!("  {} already exists", CONFIG_FILE).green());
    }

    // ---- 4. Runtime dependencies --------------------------------------------
    println!("{}", "  [4/4] Checking runtime packages...".cyan());
    let interpreter = detect_interpreter(INTERPRETER_CANDIDATES);
    match &interpreter {
        Some(info) => {
            println!(
                "{}",
                format!("  Interpreter: {} ({})", info.command, info.version).dimmed()
            );
        }
        None => {
            println!("{}", "  No Python interpreter found on PATH".yellow());
        }
    }

    if let Err(e) = check_packages(interpreter.as_ref(), packages) {
        if let PrepareError::MissingDependencies(names) = &e {
            for name in names {
                println!("{}", format!("  Missing package: {}", name).yellow());
            }
            println!("{}", format!("  Install with: {}", INSTALL_HINT).yellow());
        }
        return Err(e);
    }
    println!("{}", "  Required packages are installed".green());

    info!(root = %ws.root().display(), "preparation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_YAML;

    // The package list is empty in these tests so the outcome does not
    // depend on what happens to be installed on the host.

    #[test]
    fn test_fresh_workspace_gets_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        fs::write(ws.source_file(), "print('hi')\n").unwrap();

        prepare(&ws, &[]).unwrap();

        assert!(ws.data_dir().is_dir());
        assert_eq!(
            fs::read_to_string(ws.config_file()).unwrap(),
            DEFAULT_CONFIG_YAML
        );
        assert_eq!(
            fs::read_to_string(ws.module_file()).unwrap(),
            "print('hi')\n"
        );
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        fs::write(ws.source_file(), "print('hi')\n").unwrap();

        prepare(&ws, &[]).unwrap();
        let module_before = fs::read(ws.module_file()).unwrap();
        let config_before = fs::read(ws.config_file()).unwrap();

        // Mutating the source afterwards must not propagate on a second run.
        fs::write(ws.source_file(), "print('changed')\n").unwrap();
        prepare(&ws, &[]).unwrap();

        assert_eq!(fs::read(ws.module_file()).unwrap(), module_before);
        assert_eq!(fs::read(ws.config_file()).unwrap(), config_before);
    }

    #[test]
    fn test_missing_source_fails_before_other_steps() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());

        let err = prepare(&ws, &[]).unwrap_err();
        assert!(matches!(err, PrepareError::MissingSourceFile(_)));
        assert!(!ws.module_file().exists());
    }

    #[test]
    fn test_dependency_failure_leaves_filesystem_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        fs::write(ws.source_file(), "print('hi')\n").unwrap();

        // A package name no interpreter can import.
        let err = prepare(&ws, &["edulaunch_no_such_package_7f3a"]).unwrap_err();
        assert!(matches!(err, PrepareError::MissingDependencies(_)));

        assert!(ws.module_file().exists());
        assert!(ws.data_dir().is_dir());
        assert!(ws.config_file().exists());
    }
}
