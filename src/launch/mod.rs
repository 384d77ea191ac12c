//! Launch Module
//!
//! Hand execution off to Streamlit. Prints usage instructions, then blocks
//! on `streamlit run app.py` until the user terminates it.

use std::process::Command;

use colored::Colorize;
use tracing::info;

use crate::types::{LaunchError, Workspace, ENTRY_POINT};

/// Launch the Streamlit application from the workspace.
///
/// Blocks until the child exits; the child's exit status is not inspected.
/// The only failure modes are a missing entry point and a spawn error.
pub fn launch(ws: &Workspace) -> Result<(), LaunchError> {
    if !ws.entry_point().exists() {
        return Err(LaunchError::MissingEntryPoint(ENTRY_POINT.to_string()));
    }

    show_usage_panel();

    info!(entry_point = ENTRY_POINT, "starting streamlit");
    let _status = Command::new("streamlit")
        .args(["run", ENTRY_POINT])
        .current_dir(ws.root())
        .status()?;

    Ok(())
}

/// Display the static usage instructions before handing off.
fn show_usage_panel() {
    let w = 58;

    let pad = |s: &str| -> String {
        let padding = if s.len() < w { w - s.len() } else { 0 };
        format!("{}{}", s, " ".repeat(padding))
    };
    let line = |s: &str| format!("  \u{2502}{}\u{2502}", pad(s));

    let border_top = format!("  {}{}{}", "\u{256D}", "\u{2500}".repeat(w), "\u{256E}");
    let border_bot = format!("  {}{}{}", "\u{2570}", "\u{2500}".repeat(w), "\u{256F}");
    let empty_line = line("");

    println!();
    println!("{}", border_top.cyan());
    println!("{}", line("  Starting Streamlit Application").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  1. Wait for Streamlit to start").cyan());
    println!(
        "{}",
        line("  2. Open your browser to the URL shown below").cyan()
    );
    println!("{}", line("     (usually http://localhost:8501)").cyan());
    println!(
        "{}",
        line("  3. Use the interface to interact with the").cyan()
    );
    println!("{}", line("     Educational System").cyan());
    println!("{}", empty_line.cyan());
    println!("{}", line("  Press Ctrl+C to stop the application").cyan());
    println!("{}", border_bot.cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_point_fails_without_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());

        let err = launch(&ws).unwrap_err();
        match err {
            LaunchError::MissingEntryPoint(name) => assert_eq!(name, "app.py"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
