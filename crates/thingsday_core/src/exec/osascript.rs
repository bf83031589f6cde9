//! osascript subprocess runners.
//!
//! # Responsibility
//! - Run the export script and return the snapshot text it emits.
//! - Run a generated automation script and report its outcome.
//!
//! # Invariants
//! - The export snapshot is read from *stderr*, trimmed; stdout is ignored
//!   (the export script logs its table through AppleScript's `log`).
//! - `run_automation` never returns an error: failures become an outcome
//!   with exit code 1 and the failure text in `stderr`.

use crate::config::{EXPORT_SCRIPT, OSASCRIPT};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::Command;
use std::time::Instant;

/// Result type for the export path.
pub type ExecResult<T> = Result<T, ExecError>;

/// Failure invoking the external export collaborator.
#[derive(Debug)]
pub enum ExecError {
    /// The process could not be spawned at all.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The process ran but exited non-zero.
    ExportFailed {
        code: Option<i32>,
        stderr: String,
    },
}

impl Display for ExecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "failed to run `{program}`: {source}")
            }
            Self::ExportFailed { code, stderr } => match code {
                Some(code) => write!(f, "export exited with status {code}: {stderr}"),
                None => write!(f, "export terminated by signal: {stderr}"),
            },
        }
    }
}

impl Error for ExecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::ExportFailed { .. } => None,
        }
    }
}

/// Outcome of one automation-script run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Process exit code; 1 when the process could not be spawned or was
    /// killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the export script and returns the trimmed snapshot text.
///
/// # Errors
/// - `ExecError::Spawn` when the interpreter cannot be started.
/// - `ExecError::ExportFailed` when the export script exits non-zero.
///
/// An `Ok` result may still be empty text; callers treat that as "no data".
pub fn export_snapshot() -> ExecResult<String> {
    let started_at = Instant::now();
    info!("event=export_run module=exec status=start script={EXPORT_SCRIPT}");

    let output = Command::new(OSASCRIPT)
        .arg(EXPORT_SCRIPT)
        .output()
        .map_err(|source| {
            error!(
                "event=export_run module=exec status=error duration_ms={} error_code=spawn_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            ExecError::Spawn {
                program: OSASCRIPT.to_string(),
                source,
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!(
            "event=export_run module=exec status=error duration_ms={} error_code=export_failed exit={:?}",
            started_at.elapsed().as_millis(),
            output.status.code()
        );
        return Err(ExecError::ExportFailed {
            code: output.status.code(),
            stderr,
        });
    }

    let snapshot = String::from_utf8_lossy(&output.stderr).trim().to_string();
    info!(
        "event=export_run module=exec status=ok duration_ms={} bytes={}",
        started_at.elapsed().as_millis(),
        snapshot.len()
    );
    Ok(snapshot)
}

/// Runs a generated script through `osascript -e` and reports the outcome.
///
/// # Contract
/// - Never fails: spawn errors fold into `exit_code = 1` with the error
///   text in `stderr` and empty `stdout`.
pub fn run_automation(script: &str) -> ScriptOutcome {
    let started_at = Instant::now();
    info!(
        "event=script_run module=exec status=start bytes={}",
        script.len()
    );

    match Command::new(OSASCRIPT).arg("-e").arg(script).output() {
        Ok(output) => {
            let exit_code = output.status.code().unwrap_or(1);
            info!(
                "event=script_run module=exec status=ok duration_ms={} exit={}",
                started_at.elapsed().as_millis(),
                exit_code
            );
            ScriptOutcome {
                exit_code,
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }
        }
        Err(source) => {
            error!(
                "event=script_run module=exec status=error duration_ms={} error_code=spawn_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            ScriptOutcome {
                exit_code: 1,
                stdout: String::new(),
                stderr: source.to_string(),
            }
        }
    }
}
