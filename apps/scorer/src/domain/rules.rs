use crate::domain::state::GameType;

pub const TABLE_SEATS: usize = 4;
pub const MIN_ACTIVE_PLAYERS: usize = 4;
pub const MAX_ROSTER_SIZE: usize = 7;

/// Card points available in a round; the two parties' points always sum to this.
pub const TOTAL_CARD_POINTS: u8 = 120;
/// The declaring party wins a standard round with strictly more than this.
pub const WIN_THRESHOLD: u8 = 60;
/// Schneider: the winning side ends above this (equivalently the losing side
/// stays below 30).
pub const SCHNEIDER_THRESHOLD: u8 = 90;
/// Durchmarsch: a lone maximum scorer at or above this sweeps the round.
pub const SWEEP_THRESHOLD: u8 = 90;

pub const CALLED_GAME_TARIFF: i32 = 20;
pub const SOLO_TARIFF: i32 = 50;
pub const BONUS_UNIT: i32 = 10;
pub const RAMSCH_UNIT: i32 = 10;

/// Stake factor for a party of one (solo declarer, lone ramsch loser).
pub const SOLO_STAKE_FACTOR: i32 = 3;

pub const DEFAULT_PLAYER_NAMES: [&str; 4] = ["Andi", "Babsi", "Chris", "Dani"];

/// Base tariff per game type. `None` for the types that are not settled via
/// the standard tariff path (all-against-all, corrections).
pub fn base_tariff(game: GameType) -> Option<i32> {
    match game {
        GameType::CalledGame => Some(CALLED_GAME_TARIFF),
        GameType::Wenz | GameType::SuitSolo | GameType::LowBallSolo => Some(SOLO_TARIFF),
        GameType::AllAgainstAll | GameType::Correction => None,
    }
}

/// Running-card count from which the per-card bonus applies. Once met, the
/// bonus covers the full count, not only the cards above the threshold.
pub fn running_threshold(game: GameType) -> u8 {
    if game == GameType::Wenz {
        2
    } else {
        3
    }
}

/// Card-point bonuses (Schneider, Schwarz, running cards) never apply to a
/// low-ball solo, where card points do not decide the round.
pub fn has_card_point_bonuses(game: GameType) -> bool {
    game != GameType::LowBallSolo
}
