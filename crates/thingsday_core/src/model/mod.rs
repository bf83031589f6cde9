//! Domain model for the Today-list planner.
//!
//! # Responsibility
//! - Define the typed record parsed from the external snapshot.
//! - Define the move instruction the planner emits and the emitter renders.
//!
//! # Invariants
//! - Records are immutable inputs; planning never mutates them.
//! - A record's `list` reflects its bucket *before* any planned move.

pub mod todo;
