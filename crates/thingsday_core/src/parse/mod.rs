//! Snapshot text parsing.
//!
//! # Responsibility
//! - Turn the raw delimited export into typed `TodoRecord`s.
//!
//! # Invariants
//! - Parsing is permissive: ragged rows and bad timestamps never abort a run.
//! - Input line order is preserved in the output record order.

pub mod snapshot;
