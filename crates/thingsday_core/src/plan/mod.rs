//! Today-list planning.
//!
//! # Responsibility
//! - Derive per-record priority from tag conventions.
//! - Compute the ordered move plan for one snapshot.
//!
//! # Invariants
//! - Planning is pure: records in, move operations out, no side effects.
//! - Operation order within a plan is part of the external contract.

pub mod priority;
pub mod today;
