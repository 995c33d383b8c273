//! Whole-session snapshot for external persistence.
//!
//! The engine itself never touches files; a persistence collaborator
//! serializes the snapshot and hands it back later. Restoring validates the
//! structural invariants so a corrupt or hand-edited snapshot cannot smuggle
//! an inconsistent ledger into a live session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::ledger::recompute_totals;
use crate::domain::rules::MAX_ROSTER_SIZE;
use crate::domain::session::GameSession;
use crate::domain::state::{EntryId, PlayerId, SessionState};
use crate::errors::DomainError;

/// Serializable view of everything a session needs to be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Roster names `reset` rebuilds from.
    pub default_names: Vec<String>,
}

impl GameSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        let (state, default_names) = self.parts();
        SessionSnapshot {
            state: state.clone(),
            default_names: default_names.to_vec(),
        }
    }

    /// Rebuild a session from a persisted snapshot.
    ///
    /// Rejects duplicate or over-cap rosters, duplicate entry ids,
    /// references to unknown players, and totals that do not match the
    /// recomputed fold over the entries.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self, DomainError> {
        validate_state(&snapshot.state)?;
        Ok(Self::from_parts(snapshot.state, snapshot.default_names))
    }
}

fn validate_state(state: &SessionState) -> Result<(), DomainError> {
    if state.roster.len() > MAX_ROSTER_SIZE {
        return Err(DomainError::validation(format!(
            "roster has {} members, cap is {MAX_ROSTER_SIZE}",
            state.roster.len()
        )));
    }

    let mut player_ids: BTreeSet<PlayerId> = BTreeSet::new();
    for player in &state.roster {
        if !player_ids.insert(player.id) {
            return Err(DomainError::validation(format!(
                "duplicate player id {}",
                player.id
            )));
        }
    }

    let mut entry_ids: BTreeSet<EntryId> = BTreeSet::new();
    for entry in &state.entries {
        if !entry_ids.insert(entry.id) {
            return Err(DomainError::validation(format!(
                "duplicate entry id {}",
                entry.id
            )));
        }
        let referenced = entry
            .deltas
            .keys()
            .chain(entry.seated.iter())
            .chain(entry.no_trick_players.iter())
            .copied()
            .chain(entry.declarer)
            .chain(entry.partner);
        for id in referenced {
            if !player_ids.contains(&id) {
                return Err(DomainError::validation(format!(
                    "entry {} references unknown player id {id}",
                    entry.id
                )));
            }
        }
    }

    let expected = recompute_totals(&state.roster, &state.entries);
    if state.totals != expected {
        return Err(DomainError::validation(
            "totals do not match the entry sequence",
        ));
    }

    Ok(())
}
