//! Builders shared by the domain unit tests.

use std::collections::BTreeSet;

use crate::domain::state::{
    GameType, LedgerEntry, Player, PlayerId, RamschRoundInput, StandardRoundInput,
};

/// Roster of `n` active players with ids 1..=n.
pub fn make_roster(n: u32) -> Vec<Player> {
    (1..=n)
        .map(|id| Player {
            id,
            name: format!("P{id}"),
            active: true,
        })
        .collect()
}

pub fn seats(ids: &[PlayerId]) -> BTreeSet<PlayerId> {
    ids.iter().copied().collect()
}

/// Bare entry carrying only an id and a delta map, for aggregator tests.
pub fn entry_with_deltas(id: u64, deltas: &[(PlayerId, i32)]) -> LedgerEntry {
    LedgerEntry {
        id,
        game_type: GameType::Correction,
        declarer: None,
        partner: None,
        deltas: deltas.iter().copied().collect(),
        seated: BTreeSet::new(),
        no_trick_players: BTreeSet::new(),
        declarer_party_points: None,
        running_cards: 0,
        schneider: false,
        schwarz: false,
        doubled: false,
        redoubled: false,
    }
}

/// Standard round input with no runners, no doubling and the win flag unset;
/// tests override what they need.
pub fn standard_input(
    game_type: GameType,
    declarer: PlayerId,
    partner: Option<PlayerId>,
    declarer_party_points: u8,
    seated: &[PlayerId],
) -> StandardRoundInput {
    StandardRoundInput {
        game_type,
        declarer,
        partner,
        declarer_party_points,
        declarer_won: false,
        running_cards: 0,
        doubled: false,
        redoubled: false,
        seated: seats(seated),
    }
}

pub fn ramsch_input(
    card_points: &[(PlayerId, u8)],
    no_trick_players: &[PlayerId],
    seated: &[PlayerId],
) -> RamschRoundInput {
    RamschRoundInput {
        card_points: card_points.iter().copied().collect(),
        no_trick_players: seats(no_trick_players),
        seated: seats(seated),
    }
}
