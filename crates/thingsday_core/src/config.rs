//! Plan configuration and external-tool constants.
//!
//! # Responsibility
//! - Hold the immutable knobs the planner is parameterized by.
//! - Name the external collaborator files/commands in one place.
//!
//! # Invariants
//! - `PlanConfig` is constructed once per run and never mutated.
//! - Defaults match the conventions the Things3 setup was built around.

/// AppleScript interpreter binary.
pub const OSASCRIPT: &str = "osascript";

/// Export script that dumps the current Things3 snapshot to stderr.
pub const EXPORT_SCRIPT: &str = "things2text.scpt";

/// Static AppleScript helpers prepended verbatim to every generated script.
pub const HELPERS_FILE: &str = "helpers.applescript";

/// Immutable planning parameters, threaded explicitly into `plan_today`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Total budget for the Today list, including the reserved KIT slot.
    pub max_today: usize,
    /// Reserved tag whose first carrier is always ensured in Today.
    pub kit_tag: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_today: 5,
            kit_tag: "KIT".to_string(),
        }
    }
}
