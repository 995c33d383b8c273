//! The mutable session container exposing the command surface.
//!
//! Every command is a total function of (state, input): business-rule
//! violations are silently rejected and logged, never surfaced as errors.
//! Totals are recomputed from the full entry sequence after every mutation
//! so they stay a pure function of (roster, entries).

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::domain::ledger;
use crate::domain::rules::{DEFAULT_PLAYER_NAMES, MAX_ROSTER_SIZE, MIN_ACTIVE_PLAYERS};
use crate::domain::settlement::{settle_ramsch_round, settle_standard_round};
use crate::domain::state::{
    EntryId, GameType, LedgerEntry, Player, PlayerId, RamschRoundInput, SessionState,
    StandardRoundInput,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    state: SessionState,
    /// Names the roster is rebuilt from on `reset`.
    default_names: Vec<String>,
    next_player_id: PlayerId,
    next_entry_id: EntryId,
}

impl GameSession {
    /// Session with the default four-player roster.
    pub fn new() -> Self {
        Self::with_roster(DEFAULT_PLAYER_NAMES.iter().map(|n| n.to_string()))
    }

    /// Session with a caller-configured roster. At most `MAX_ROSTER_SIZE`
    /// names are taken; all players start active with ids 1, 2, ...
    pub fn with_roster<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let default_names: Vec<String> =
            names.into_iter().take(MAX_ROSTER_SIZE).collect();
        let state = fresh_state(&default_names);
        let next_player_id = state.roster.len() as PlayerId + 1;
        Self {
            state,
            default_names,
            next_player_id,
            next_entry_id: 1,
        }
    }

    /// Read-only snapshot of roster, entries and totals.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Append a roster member. No-op once the roster is full.
    pub fn add_player(&mut self, name: impl Into<String>) {
        if self.state.roster.len() >= MAX_ROSTER_SIZE {
            warn!(limit = MAX_ROSTER_SIZE, "add_player: roster full, ignoring");
            return;
        }
        let id = self.next_player_id;
        self.next_player_id += 1;
        let name = name.into();
        debug!(player_id = id, name = %name, "player added");
        self.state.roster.push(Player {
            id,
            name,
            active: true,
        });
        self.recompute();
    }

    /// Soft-remove a player from future rounds. No-op if that would drop
    /// the active count below the four-player floor, or for an unknown id.
    pub fn deactivate_player(&mut self, id: PlayerId) {
        if self.state.active_count() <= MIN_ACTIVE_PLAYERS {
            warn!(
                player_id = id,
                floor = MIN_ACTIVE_PLAYERS,
                "deactivate_player: at the active floor, ignoring"
            );
            return;
        }
        let Some(player) = self.state.roster.iter_mut().find(|p| p.id == id) else {
            warn!(player_id = id, "deactivate_player: unknown id, ignoring");
            return;
        };
        player.active = false;
        debug!(player_id = id, "player deactivated");
    }

    /// Re-seat a previously deactivated player. The roster cap is a UI
    /// concern on this path and not enforced here.
    pub fn activate_player(&mut self, id: PlayerId) {
        let Some(player) = self.state.roster.iter_mut().find(|p| p.id == id) else {
            warn!(player_id = id, "activate_player: unknown id, ignoring");
            return;
        };
        player.active = true;
        debug!(player_id = id, "player activated");
    }

    /// Change a player's display name. Identity is the id, so history and
    /// totals keep resolving; the recompute keeps the rename on the one
    /// consistency path shared with every other mutation.
    pub fn rename_player(&mut self, id: PlayerId, new_name: impl Into<String>) {
        let Some(player) = self.state.roster.iter_mut().find(|p| p.id == id) else {
            warn!(player_id = id, "rename_player: unknown id, ignoring");
            return;
        };
        let new_name = new_name.into();
        debug!(player_id = id, from = %player.name, to = %new_name, "player renamed");
        player.name = new_name;
        self.recompute();
    }

    /// Settle a declarer-led round and append it to the ledger.
    ///
    /// No-op for non-standard game types (all-against-all rounds have their
    /// own entry point) and when any referenced player id is unknown.
    pub fn add_round(&mut self, input: StandardRoundInput) {
        if !input.game_type.is_standard() {
            warn!(game_type = ?input.game_type, "add_round: not a standard game type, ignoring");
            return;
        }
        if !self.knows_round_players(&input.seated, Some(input.declarer), input.partner) {
            return;
        }

        let settlement = settle_standard_round(&input, &self.state.roster);
        let entry = LedgerEntry {
            id: self.alloc_entry_id(),
            game_type: input.game_type,
            declarer: Some(input.declarer),
            partner: input.partner.filter(|_| input.game_type.is_partnership()),
            deltas: settlement.deltas,
            seated: input.seated,
            no_trick_players: BTreeSet::new(),
            declarer_party_points: Some(input.declarer_party_points),
            running_cards: input.running_cards,
            schneider: settlement.schneider,
            schwarz: settlement.schwarz,
            doubled: input.doubled,
            redoubled: input.redoubled,
        };
        debug!(
            entry_id = entry.id,
            game_type = ?entry.game_type,
            declarer = input.declarer,
            declarer_party_won = settlement.declarer_party_won,
            "round settled"
        );
        self.state.entries.push(entry);
        self.recompute();
    }

    /// Settle an all-against-all round and append it to the ledger.
    ///
    /// No-op when the maximum reported card score is zero (nothing to
    /// settle) or when a seated id is unknown. Card-point and no-trick
    /// references to players outside the roster are ignored.
    pub fn add_ramsch_round(&mut self, input: RamschRoundInput) {
        let max_reported = input.card_points.values().copied().max().unwrap_or(0);
        if max_reported == 0 {
            debug!("add_ramsch_round: no card points reported, ignoring");
            return;
        }
        if !self.knows_round_players(&input.seated, None, None) {
            return;
        }

        let settlement = settle_ramsch_round(&input, &self.state.roster);
        let no_trick_players: BTreeSet<PlayerId> = input
            .no_trick_players
            .intersection(&input.seated)
            .copied()
            .collect();
        let entry = LedgerEntry {
            id: self.alloc_entry_id(),
            game_type: GameType::AllAgainstAll,
            declarer: None,
            partner: None,
            deltas: settlement.deltas,
            seated: input.seated,
            no_trick_players,
            declarer_party_points: None,
            running_cards: 0,
            schneider: false,
            schwarz: false,
            doubled: false,
            redoubled: false,
        };
        debug!(
            entry_id = entry.id,
            sweep = settlement.sweep,
            "all-against-all round settled"
        );
        self.state.entries.push(entry);
        self.recompute();
    }

    /// Replace an entry's payout map with caller-supplied deltas and retag
    /// it as a correction. The stored map is made roster-complete (missing
    /// players default to zero, unknown ids are dropped); seated and
    /// no-trick sets stay as they were for audit context.
    ///
    /// The balanced-sum invariant is the caller's responsibility; an
    /// unbalanced correction is accepted and only logged.
    pub fn correct_round(&mut self, entry_id: EntryId, new_deltas: &BTreeMap<PlayerId, i32>) {
        let Some(index) = self.state.entries.iter().position(|e| e.id == entry_id) else {
            warn!(entry_id, "correct_round: no such entry, ignoring");
            return;
        };

        let mut deltas: BTreeMap<PlayerId, i32> =
            self.state.roster.iter().map(|p| (p.id, 0)).collect();
        for (id, delta) in new_deltas {
            if let Some(slot) = deltas.get_mut(id) {
                *slot = *delta;
            } else {
                warn!(entry_id, player_id = *id, "correct_round: unknown id in deltas, dropped");
            }
        }
        let balance: i32 = deltas.values().sum();
        if balance != 0 {
            warn!(entry_id, balance, "correction deltas do not sum to zero");
        }

        let entry = &mut self.state.entries[index];
        entry.game_type = GameType::Correction;
        entry.deltas = deltas;
        debug!(entry_id, "entry corrected");
        self.recompute();
    }

    /// Clear back to the configured default roster: fresh ids, no entries,
    /// zeroed totals.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.state = fresh_state(&self.default_names);
        self.next_player_id = self.state.roster.len() as PlayerId + 1;
        self.next_entry_id = 1;
    }

    fn alloc_entry_id(&mut self) -> EntryId {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }

    fn recompute(&mut self) {
        self.state.totals = ledger::recompute_totals(&self.state.roster, &self.state.entries);
    }

    /// Vet every player id a round command references. Unknown ids reject
    /// the whole command so stale references degrade to a no-op.
    fn knows_round_players(
        &self,
        seated: &BTreeSet<PlayerId>,
        declarer: Option<PlayerId>,
        partner: Option<PlayerId>,
    ) -> bool {
        for id in seated.iter().copied().chain(declarer).chain(partner) {
            if !self.state.knows(id) {
                warn!(player_id = id, "round references an unknown player id, ignoring");
                return false;
            }
        }
        true
    }

    pub(crate) fn parts(&self) -> (&SessionState, &[String]) {
        (&self.state, &self.default_names)
    }

    pub(crate) fn from_parts(state: SessionState, default_names: Vec<String>) -> Self {
        let next_player_id = state.roster.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_entry_id = state.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            state,
            default_names,
            next_player_id,
            next_entry_id,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_state(names: &[String]) -> SessionState {
    let roster: Vec<Player> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Player {
            id: i as PlayerId + 1,
            name: name.clone(),
            active: true,
        })
        .collect();
    let totals = roster.iter().map(|p| (p.id, 0)).collect();
    SessionState {
        roster,
        entries: Vec::new(),
        totals,
    }
}
