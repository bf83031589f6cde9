//! Todo record and move-operation model.
//!
//! # Responsibility
//! - Mirror one exported Things3 task as a typed, serde-friendly record.
//! - Keep the source-list identifier a closed enum with a raw fallback.
//!
//! # Invariants
//! - `id` is an opaque external identifier, unique within one snapshot.
//! - `name` is annotation-only; planning logic never branches on it.
//! - `ListId` round-trips through its source identifier string unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Things3 source identifier for the Today list.
pub const TODAY_LIST_SOURCE: &str = "TMTodayListSource";
/// Things3 source identifier for the Logbook (completed items).
pub const LOGBOOK_LIST_SOURCE: &str = "TMLogbookListSource";
/// Things3 source identifier for Upcoming (scheduled items).
pub const UPCOMING_LIST_SOURCE: &str = "TMCalendarListSource";

/// Bucket a record currently lives in, as reported by the export.
///
/// Unrecognized source identifiers are preserved verbatim in `Other` so the
/// eligibility filter stays exhaustive without losing information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListId {
    Today,
    Logbook,
    Upcoming,
    Other(String),
}

impl ListId {
    /// Maps a raw source-list identifier to its variant.
    pub fn from_source_id(raw: &str) -> Self {
        match raw {
            TODAY_LIST_SOURCE => Self::Today,
            LOGBOOK_LIST_SOURCE => Self::Logbook,
            UPCOMING_LIST_SOURCE => Self::Upcoming,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the raw source-list identifier this variant came from.
    pub fn source_id(&self) -> &str {
        match self {
            Self::Today => TODAY_LIST_SOURCE,
            Self::Logbook => LOGBOOK_LIST_SOURCE,
            Self::Upcoming => UPCOMING_LIST_SOURCE,
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ListId {
    fn from(value: String) -> Self {
        Self::from_source_id(value.as_str())
    }
}

impl From<ListId> for String {
    fn from(value: ListId) -> Self {
        value.source_id().to_string()
    }
}

/// One exported task, typed at parse time and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Opaque stable identifier owned by the external task manager.
    pub id: String,
    /// Human-readable label; used only for script annotations and JSON output.
    pub name: String,
    /// Bucket the record was in when the snapshot was taken.
    #[serde(rename = "listID")]
    pub list: ListId,
    /// Tags in source order, comma-split and trimmed, empties dropped.
    pub tags: Vec<String>,
    /// Completion timestamp; `None` when absent or unparseable.
    #[serde(rename = "completionDate")]
    pub completion_date: Option<NaiveDateTime>,
}

/// Destination bucket for a move instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetList {
    Today,
    Anytime,
}

impl TargetList {
    /// Returns the list name as the automation script spells it.
    pub fn script_name(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Anytime => "Anytime",
        }
    }
}

/// One move instruction: pure data, ordered within a plan.
///
/// Emission order is load-bearing: later operations execute after earlier
/// ones when the generated script runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOperation {
    /// Identifier of the record to move.
    pub todo_id: String,
    /// Destination bucket.
    pub target: TargetList,
    /// Record name, carried as a trailing script annotation only.
    pub name: String,
}

impl MoveOperation {
    /// Builds a move for `todo` into `target`.
    pub fn new(todo: &TodoRecord, target: TargetList) -> Self {
        Self {
            todo_id: todo.id.clone(),
            target,
            name: todo.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ListId, LOGBOOK_LIST_SOURCE, TODAY_LIST_SOURCE, UPCOMING_LIST_SOURCE};

    #[test]
    fn list_id_maps_known_source_identifiers() {
        assert_eq!(ListId::from_source_id(TODAY_LIST_SOURCE), ListId::Today);
        assert_eq!(ListId::from_source_id(LOGBOOK_LIST_SOURCE), ListId::Logbook);
        assert_eq!(
            ListId::from_source_id(UPCOMING_LIST_SOURCE),
            ListId::Upcoming
        );
    }

    #[test]
    fn list_id_preserves_unknown_source_identifiers() {
        let list = ListId::from_source_id("TMAreaSource");
        assert_eq!(list, ListId::Other("TMAreaSource".to_string()));
        assert_eq!(list.source_id(), "TMAreaSource");
    }
}
