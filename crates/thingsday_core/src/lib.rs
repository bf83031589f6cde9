//! Core planning logic for the Things3 Today-list rebalancer.
//! This crate is the single source of truth for parsing, priority and
//! move-plan invariants; the CLI only wires it to flags and stdout.

pub mod config;
pub mod exec;
pub mod logging;
pub mod model;
pub mod parse;
pub mod plan;
pub mod script;

pub use config::PlanConfig;
pub use exec::osascript::{export_snapshot, run_automation, ExecError, ExecResult, ScriptOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{ListId, MoveOperation, TargetList, TodoRecord};
pub use parse::snapshot::{parse_snapshot, FIELD_DELIMITER};
pub use plan::priority::Priority;
pub use plan::today::plan_today;
pub use script::render_script;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
