//! Dependency Checks
//!
//! Verify the Python packages the Educational System imports at runtime are
//! actually importable, by asking the interpreter directly.

use std::process::Command;

use tracing::debug;

use super::environment::InterpreterInfo;
use crate::types::PrepareError;

/// Import names the application requires at runtime.
pub const REQUIRED_PACKAGES: &[&str] = &[
    "streamlit",
    "torch",
    "torch_geometric",
    "numpy",
    "pandas",
    "plotly",
    "yaml",
];

/// The pip hint shown when packages are missing. Uses distribution names,
/// which differ from import names for pyyaml.
pub const INSTALL_HINT: &str =
    "pip install streamlit torch torch_geometric numpy pandas plotly pyyaml";

/// Probe a single package: `<interpreter> -c "import <name>"`.
fn is_importable(interpreter: &str, package: &str) -> bool {
    let probe = format!("import {}", package);
    match Command::new(interpreter).args(["-c", &probe]).output() {
        Ok(output) => output.status.success(),
        Err(e) => {
            debug!(package, error = %e, "import probe failed to run");
            false
        }
    }
}

/// Return the subset of `packages` the interpreter cannot import,
/// in the order given.
pub fn missing_packages(interpreter: &InterpreterInfo, packages: &[&str]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| !is_importable(&interpreter.command, p))
        .map(|p| p.to_string())
        .collect()
}

/// Check every required package, treating an absent interpreter as all
/// packages missing.
pub fn check_packages(
    interpreter: Option<&InterpreterInfo>,
    packages: &[&str],
) -> Result<(), PrepareError> {
    let missing = match interpreter {
        Some(info) => missing_packages(info, packages),
        None => packages.iter().map(|p| p.to_string()).collect(),
    };

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PrepareError::MissingDependencies(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_interpreter_means_everything_missing() {
        let err = check_packages(None, &["streamlit", "torch"]).unwrap_err();
        match err {
            PrepareError::MissingDependencies(names) => {
                assert_eq!(names, vec!["streamlit", "torch"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unrunnable_interpreter_reports_all_packages() {
        let fake = InterpreterInfo {
            command: "edulaunch-no-such-interpreter-7f3a".to_string(),
            version: String::new(),
        };
        let missing = missing_packages(&fake, REQUIRED_PACKAGES);
        assert_eq!(missing.len(), REQUIRED_PACKAGES.len());
    }

    #[test]
    fn test_empty_package_list_passes() {
        assert!(check_packages(None, &[]).is_ok());
    }
}
