//! Delimited snapshot parser.
//!
//! # Responsibility
//! - Parse the header row and zip each data row against it positionally.
//! - Derive the tag list and optional completion timestamp per record.
//!
//! # Invariants
//! - Blank lines (after trim) contribute nothing and never reset the header.
//! - A row with fewer fields than headers simply lacks the trailing fields.
//! - A duplicate header name takes the later column's value (plain zip).
//! - A timestamp that fails to parse becomes `None`, never an error.

use crate::model::todo::{ListId, TodoRecord};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// Literal token separating fields within one exported line.
pub const FIELD_DELIMITER: &str = "|___|";

const ID_FIELD: &str = "id";
const NAME_FIELD: &str = "name";
const LIST_ID_FIELD: &str = "listID";
const TAG_NAMES_FIELD: &str = "tagNames";
const COMPLETION_DATE_FIELD: &str = "completionDate";

/// Parses raw export text into records, preserving input order.
///
/// # Contract
/// - The first non-blank line is the header row.
/// - Every later non-blank line becomes exactly one record.
/// - Input with no non-blank lines yields an empty Vec, not an error.
pub fn parse_snapshot(raw: &str) -> Vec<TodoRecord> {
    let mut headers: Option<Vec<&str>> = None;
    let mut records = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        match headers.as_deref() {
            None => headers = Some(values),
            Some(names) => records.push(record_from_row(names, &values)),
        }
    }

    records
}

fn record_from_row(names: &[&str], values: &[&str]) -> TodoRecord {
    // Plain positional zip: missing trailing fields are absent, a duplicate
    // header name keeps the later column's value.
    let mut fields: HashMap<&str, &str> = HashMap::with_capacity(names.len());
    for (name, value) in names.iter().zip(values.iter()) {
        fields.insert(*name, *value);
    }

    TodoRecord {
        id: field_or_empty(&fields, ID_FIELD),
        name: field_or_empty(&fields, NAME_FIELD),
        list: ListId::from_source_id(fields.get(LIST_ID_FIELD).copied().unwrap_or_default()),
        tags: split_tags(fields.get(TAG_NAMES_FIELD).copied().unwrap_or_default()),
        completion_date: fields
            .get(COMPLETION_DATE_FIELD)
            .and_then(|value| parse_completion_date(value)),
    }
}

fn field_or_empty(fields: &HashMap<&str, &str>, name: &str) -> String {
    fields.get(name).copied().unwrap_or_default().to_string()
}

/// Splits a comma-joined tag field, trimming pieces and dropping empties.
///
/// Source order is preserved; the priority resolver and the KIT scan both
/// rely on seeing tags exactly as exported.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an ISO-8601-like completion timestamp, permissively.
///
/// Accepts RFC 3339 (offset folded away), naive date-times, and bare dates
/// (read as midnight). Any other shape yields `None`.
pub fn parse_completion_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = raw.parse::<NaiveDateTime>() {
        return Some(value);
    }
    if let Ok(value) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(value.naive_local());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
