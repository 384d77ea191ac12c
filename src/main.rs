//! Edulaunch Entry Point
//!
//! Prepares the working directory for the Educational Achievement and
//! Recommendation System and hands off to Streamlit. Running with no
//! arguments performs preparation then launch.

use clap::Parser;
use colored::Colorize;

use edulaunch::launch::launch;
use edulaunch::setup::dependencies::REQUIRED_PACKAGES;
use edulaunch::setup::environment::{detect_interpreter, INTERPRETER_CANDIDATES};
use edulaunch::setup::prepare;
use edulaunch::types::Workspace;

const VERSION: &str = "0.1.0";

/// Edulaunch -- Educational System Bootstrap
#[derive(Parser, Debug)]
#[command(
    name = "edulaunch",
    version = VERSION,
    about = "Prepare and launch the Educational Achievement and Recommendation System"
)]
struct Cli {
    /// Run the preparation phase only, without launching Streamlit
    #[arg(long)]
    prepare: bool,

    /// Report which artifacts exist without touching the filesystem
    #[arg(long)]
    status: bool,
}

// ---- Status Command ---------------------------------------------------------

/// Report which artifacts exist in the working directory.
fn show_status(ws: &Workspace) {
    let mark = |present: bool| if present { "yes" } else { "no" };

    let interpreter = detect_interpreter(INTERPRETER_CANDIDATES)
        .map(|i| format!("{} ({})", i.command, i.version))
        .unwrap_or_else(|| "not found".to_string());

    println!(
        r#"
=== EDULAUNCH STATUS ===
Source file:   {}
Module file:   {}
Data dir:      {}
Config file:   {}
Entry point:   {}
Interpreter:   {}
Version:       {}
========================
"#,
        mark(ws.source_file().exists()),
        mark(ws.module_file().exists()),
        mark(ws.data_dir().is_dir()),
        mark(ws.config_file().exists()),
        mark(ws.entry_point().exists()),
        interpreter,
        VERSION,
    );
}

// ---- Entry Point -----------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();
    let ws = Workspace::new(".");

    if cli.status {
        show_status(&ws);
        return;
    }

    let now = chrono::Utc::now().to_rfc3339();
    println!("[{}] Edulaunch v{}", now, VERSION);
    println!(
        "\n{}",
        "  Preparing Educational System for Streamlit...\n".white()
    );

    if let Err(e) = prepare(&ws, REQUIRED_PACKAGES) {
        eprintln!("{}", format!("\nPreparation failed: {}", e).red());
        std::process::exit(1);
    }

    println!(
        "{}",
        "\n  Preparation complete. Ready to run the Streamlit app.".green()
    );

    if cli.prepare {
        return;
    }

    // Launch-phase failures are reported but do not change the exit code;
    // the preparation artifacts are already in place.
    if let Err(e) = launch(&ws) {
        eprintln!("{}", format!("Launch failed: {}", e).red());
    }
}
