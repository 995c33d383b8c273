//! Totals aggregation over the entry sequence.

use std::collections::BTreeMap;

use crate::domain::state::{LedgerEntry, Player, PlayerId};

/// Recompute per-player totals as a pure fold over the entries.
///
/// Totals cover exactly the current roster. Deltas keyed by ids that are not
/// on the roster are skipped; the roster never shrinks, so in a consistent
/// session none exist.
pub fn recompute_totals(
    roster: &[Player],
    entries: &[LedgerEntry],
) -> BTreeMap<PlayerId, i32> {
    let mut totals: BTreeMap<PlayerId, i32> = roster.iter().map(|p| (p.id, 0)).collect();
    for entry in entries {
        for (id, delta) in &entry.deltas {
            if let Some(total) = totals.get_mut(id) {
                *total += delta;
            }
        }
    }
    totals
}

/// Sum of an entry's deltas; zero for every settled round.
pub fn entry_balance(entry: &LedgerEntry) -> i32 {
    entry.deltas.values().sum()
}
