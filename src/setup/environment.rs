//! Environment Detection
//!
//! Find a usable Python interpreter for the dependency checks. Probes the
//! conventional names in order and reports the first that answers.

use std::process::Command;

use tracing::debug;

/// Interpreter names probed in order.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Information about the detected Python interpreter.
#[derive(Clone, Debug)]
pub struct InterpreterInfo {
    /// The command name that answered, e.g. `python3`.
    pub command: String,
    /// The version string it reported, e.g. `Python 3.11.4`.
    pub version: String,
}

/// Detect a Python interpreter on PATH, trying `candidates` in order.
///
/// Returns `None` when no candidate answers; the dependency check then
/// reports every required package as missing.
pub fn detect_interpreter(candidates: &[&str]) -> Option<InterpreterInfo> {
    for &candidate in candidates {
        let output = match Command::new(candidate).arg("--version").output() {
            Ok(o) => o,
            Err(e) => {
                debug!(candidate, error = %e, "interpreter probe failed");
                continue;
            }
        };

        if !output.status.success() {
            continue;
        }

        // Python 2 printed the version on stderr; accept either stream.
        let raw = if output.stdout.is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        let version = String::from_utf8_lossy(&raw).trim().to_string();

        debug!(candidate, %version, "interpreter detected");
        return Some(InterpreterInfo {
            command: candidate.to_string(),
            version,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_answering_candidate_is_none() {
        let candidates = &["edulaunch-no-such-interpreter-7f3a"];
        assert!(detect_interpreter(candidates).is_none());
    }

    #[test]
    fn test_empty_candidate_list_is_none() {
        assert!(detect_interpreter(&[]).is_none());
    }
}
