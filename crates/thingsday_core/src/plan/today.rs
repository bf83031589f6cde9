//! Today-list move planning.
//!
//! # Responsibility
//! - Compute the full, ordered move plan for one snapshot.
//!
//! # Invariants
//! - The snapshot is read-only; records are never mutated, only referenced
//!   by id in emitted operations.
//! - Drain operations come first, selection operations second, the KIT
//!   guarantee last; order within each group is part of the contract.
//! - At most `max_today` operations target Today per run.

use crate::config::PlanConfig;
use crate::model::todo::{ListId, MoveOperation, TargetList, TodoRecord};
use crate::plan::priority::Priority;
use log::info;
use std::collections::HashSet;

/// Computes the ordered move plan for `todos`.
///
/// # Contract
/// 1. Every record currently in Today is drained to Anytime, in snapshot
///    order.
/// 2. Records in Upcoming or Logbook are never candidates; everything else
///    (including just-drained records, whose stored list is unchanged) is.
/// 3. The candidate pool is deduplicated by id, first occurrence kept.
/// 4. Candidates are stably sorted by ascending priority.
/// 5. The first `max_today - 1` candidates are selected, reserving one
///    slot for the KIT guarantee.
/// 6. Selection moves are emitted in *reverse* sorted order: the external
///    engine surfaces later moves nearer the top of Today, so the most
///    urgent record must be moved last.
/// 7. The first record in the full snapshot carrying the KIT tag gets one
///    final move to Today; none exists, none is emitted.
pub fn plan_today(todos: &[TodoRecord], config: &PlanConfig) -> Vec<MoveOperation> {
    let mut operations = Vec::new();

    for todo in todos.iter().filter(|todo| todo.list == ListId::Today) {
        operations.push(MoveOperation::new(todo, TargetList::Anytime));
    }
    let drained = operations.len();

    let mut seen_ids = HashSet::new();
    let mut pool: Vec<&TodoRecord> = todos
        .iter()
        .filter(|todo| !matches!(todo.list, ListId::Upcoming | ListId::Logbook))
        .filter(|todo| seen_ids.insert(todo.id.as_str()))
        .collect();

    // Stable sort: equal priorities keep their snapshot order.
    pool.sort_by_key(|todo| Priority::from_tags(&todo.tags));

    let budget = config.max_today.saturating_sub(1);
    let selected = &pool[..pool.len().min(budget)];
    for todo in selected.iter().rev() {
        operations.push(MoveOperation::new(todo, TargetList::Today));
    }

    let kit = first_kit(todos, &config.kit_tag);
    if let Some(todo) = kit {
        operations.push(MoveOperation::new(todo, TargetList::Today));
    }

    info!(
        "event=plan_today module=plan status=ok snapshot={} drained={} selected={} kit={}",
        todos.len(),
        drained,
        selected.len(),
        kit.is_some()
    );

    operations
}

/// Finds the first record carrying the reserved tag, scanning the full
/// snapshot in its original order.
fn first_kit<'a>(todos: &'a [TodoRecord], kit_tag: &str) -> Option<&'a TodoRecord> {
    todos
        .iter()
        .find(|todo| todo.tags.iter().any(|tag| tag == kit_tag))
}
