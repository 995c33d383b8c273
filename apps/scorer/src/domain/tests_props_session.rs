//! Property-based tests for session-wide consistency invariants.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::domain::ledger;
use crate::domain::session::GameSession;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Totals are always exactly the fold of the entry sequence, and every
    /// settled entry balances to zero.
    #[test]
    fn prop_totals_are_the_fold_of_entries(
        inputs in proptest::collection::vec(test_gens::standard_round_input(4), 0..12),
    ) {
        let mut session = GameSession::new();
        for input in inputs {
            session.add_round(input);
        }

        let state = session.state();
        let expected = ledger::recompute_totals(&state.roster, &state.entries);
        prop_assert_eq!(&state.totals, &expected);
        for entry in &state.entries {
            prop_assert_eq!(ledger::entry_balance(entry), 0);
        }
    }

    /// Corrections, balanced or not, never break the totals-as-fold
    /// invariant.
    #[test]
    fn prop_corrections_keep_totals_consistent(
        inputs in proptest::collection::vec(test_gens::standard_round_input(4), 1..6),
        corrections in proptest::collection::btree_map(1u32..=4, -100i32..=100, 0..4),
        target in 1u64..=6,
    ) {
        let mut session = GameSession::new();
        for input in inputs {
            session.add_round(input);
        }
        session.correct_round(target, &corrections);

        let state = session.state();
        let expected = ledger::recompute_totals(&state.roster, &state.entries);
        prop_assert_eq!(&state.totals, &expected);
    }

    /// Renaming a player to their current name is pure identity bookkeeping:
    /// the whole session compares equal afterwards.
    #[test]
    fn prop_rename_to_current_name_changes_nothing(
        inputs in proptest::collection::vec(test_gens::standard_round_input(4), 1..6),
        id in 1u32..=4,
    ) {
        let mut session = GameSession::new();
        for input in inputs {
            session.add_round(input);
        }
        let before = session.clone();

        let current = session.state().player(id).expect("default roster id").name.clone();
        session.rename_player(id, current);

        prop_assert_eq!(session, before);
    }

    /// Ramsch rounds keep the same consistency guarantees, modulo the
    /// documented split residue inside a single entry.
    #[test]
    fn prop_ramsch_rounds_keep_totals_consistent(
        inputs in proptest::collection::vec(test_gens::ramsch_round_input(4), 0..8),
    ) {
        let mut session = GameSession::new();
        for input in inputs {
            session.add_ramsch_round(input);
        }

        let state = session.state();
        let expected = ledger::recompute_totals(&state.roster, &state.entries);
        prop_assert_eq!(&state.totals, &expected);
    }

    /// A correction map is stored roster-complete: every roster member has a
    /// delta, mentioned or not.
    #[test]
    fn prop_corrected_entries_cover_the_roster(
        input in test_gens::standard_round_input(4),
        corrections in proptest::collection::btree_map(1u32..=4, -100i32..=100, 0..4),
    ) {
        let mut session = GameSession::new();
        session.add_round(input);
        let entry_id = session.state().entries[0].id;

        session.correct_round(entry_id, &corrections);

        let entry = &session.state().entries[0];
        for player in &session.state().roster {
            prop_assert!(entry.deltas.contains_key(&player.id));
        }
        let map: &BTreeMap<u32, i32> = &entry.deltas;
        prop_assert_eq!(map.len(), session.state().roster.len());
    }
}
