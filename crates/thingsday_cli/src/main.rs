//! Today-list rebalancer CLI.
//!
//! # Responsibility
//! - Wire flags, the export/automation collaborators and stdout to core.
//! - Keep stdout reserved for the snapshot JSON, the generated script and
//!   run diagnostics; logs go to the rotating file logger.
//!
//! # Invariants
//! - The process exit code is always 0 on completion; "no data" from the
//!   export step is reported as a stdout diagnostic, not a failure.
//! - Every run recomputes the full plan from a fresh snapshot.

use clap::Parser;
use log::{info, warn};
use thingsday_core::config::HELPERS_FILE;
use thingsday_core::{
    default_log_level, export_snapshot, init_logging, parse_snapshot, plan_today, render_script,
    run_automation, PlanConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "thingsday",
    version,
    about = "Rebalance the Things3 Today list from tag priorities"
)]
struct Cli {
    /// Compute and print the script without executing it.
    #[arg(long)]
    dry_run: bool,

    /// Print the parsed snapshot as JSON and stop before planning.
    #[arg(long)]
    print_only: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging_best_effort();
    info!(
        "event=run_start module=cli status=ok dry_run={} print_only={}",
        cli.dry_run, cli.print_only
    );

    let raw = match export_snapshot() {
        Ok(text) => text,
        Err(err) => {
            println!("Error running things2text: {err}");
            String::new()
        }
    };
    if raw.is_empty() {
        println!("No output from things2text");
        return;
    }

    let todos = parse_snapshot(&raw);
    info!(
        "event=snapshot_parsed module=cli status=ok records={}",
        todos.len()
    );

    if cli.print_only {
        match serde_json::to_string_pretty(&todos) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Failed to render snapshot as JSON: {err}"),
        }
        return;
    }

    let operations = plan_today(&todos, &PlanConfig::default());

    let helpers = match std::fs::read_to_string(HELPERS_FILE) {
        Ok(text) => text,
        Err(err) => {
            println!("Failed to read {HELPERS_FILE}: {err}");
            return;
        }
    };

    let script = render_script(&helpers, &operations);
    println!("{script}");

    if cli.dry_run {
        info!("event=run_end module=cli status=ok mode=dry_run");
        return;
    }

    let outcome = run_automation(&script);
    if outcome.exit_code != 0 {
        warn!(
            "event=run_end module=cli status=error exit={}",
            outcome.exit_code
        );
    } else {
        info!("event=run_end module=cli status=ok exit=0");
    }
    println!("{outcome:?}");
}

fn init_logging_best_effort() {
    // Logging is diagnostics-only; a failed init must not abort the run.
    let log_dir = std::env::temp_dir().join("thingsday-logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(message) = init_logging(default_log_level(), log_dir) {
        eprintln!("logging disabled: {message}");
    }
}
