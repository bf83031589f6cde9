//! External process collaborators.
//!
//! # Responsibility
//! - Invoke the export and automation tools as blocking subprocesses.
//!
//! # Invariants
//! - Export failure is "no data", never a process-fatal error.
//! - The automation runner always yields an outcome; spawn failures fold
//!   into a non-zero exit with the error text on stderr.

pub mod osascript;
