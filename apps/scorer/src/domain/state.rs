use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub type PlayerId = u32; // stable for the session; names may change underneath
pub type EntryId = u64; // monotonically increasing per session

/// A roster member. Identity is the `id`; `name` is display-only and
/// mutable. Players are never removed, only deactivated, so historical
/// entries keep resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub active: bool,
}

/// The closed set of game types a ledger entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    /// Rufspiel: declarer plus called partner against the other two.
    CalledGame,
    Wenz,
    SuitSolo,
    /// Bettel: solo with an inverted win rule and no card-point bonuses.
    LowBallSolo,
    /// Ramsch: no declarer, everyone plays for themselves.
    AllAgainstAll,
    /// Synthetic type marking a manually overridden entry.
    Correction,
}

impl GameType {
    /// Standard rounds are the declarer-led ones settled via the tariff path.
    pub fn is_standard(self) -> bool {
        matches!(
            self,
            GameType::CalledGame | GameType::Wenz | GameType::SuitSolo | GameType::LowBallSolo
        )
    }

    pub fn is_partnership(self) -> bool {
        self == GameType::CalledGame
    }
}

/// Caller-supplied facts of a declarer-led round. Ephemeral, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRoundInput {
    pub game_type: GameType,
    pub declarer: PlayerId,
    /// Second member of the declaring side; only meaningful for `CalledGame`.
    pub partner: Option<PlayerId>,
    /// Card points taken by the declaring party, 0..=120.
    pub declarer_party_points: u8,
    /// Direct win flag, consulted only for `LowBallSolo`; every other type
    /// derives the result from the card points.
    pub declarer_won: bool,
    pub running_cards: u8,
    /// Kontra.
    pub doubled: bool,
    /// Re; presupposes `doubled`, not enforced here.
    pub redoubled: bool,
    /// The four players who actually sat this round.
    pub seated: BTreeSet<PlayerId>,
}

/// Caller-supplied facts of an all-against-all round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamschRoundInput {
    pub card_points: BTreeMap<PlayerId, u8>,
    /// Jungfrau: seated players who took no tricks.
    pub no_trick_players: BTreeSet<PlayerId>,
    pub seated: BTreeSet<PlayerId>,
}

/// One settled round in the ledger. Immutable once appended, except for the
/// explicit correction path which retags it and overwrites the deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub game_type: GameType,
    pub declarer: Option<PlayerId>,
    pub partner: Option<PlayerId>,
    /// Signed payout per player, covering every roster member at creation
    /// time. Sums to zero for every settled round.
    pub deltas: BTreeMap<PlayerId, i32>,
    pub seated: BTreeSet<PlayerId>,
    pub no_trick_players: BTreeSet<PlayerId>,
    /// Audit facts for the protocol view; defaulted for all-against-all and
    /// preserved through corrections.
    pub declarer_party_points: Option<u8>,
    pub running_cards: u8,
    pub schneider: bool,
    pub schwarz: bool,
    pub doubled: bool,
    pub redoubled: bool,
}

/// Read-only view over the whole session: roster, ledger, derived totals.
///
/// Invariant: `totals` is exactly the per-player sum of deltas across
/// `entries`, recomputed from scratch after every structural change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Insertion order, never reordered or truncated.
    pub roster: Vec<Player>,
    /// Append-only, except for in-place correction by id.
    pub entries: Vec<LedgerEntry>,
    pub totals: BTreeMap<PlayerId, i32>,
}

impl SessionState {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn knows(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.roster.iter().filter(|p| p.active).count()
    }

    pub fn entry(&self, id: EntryId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
