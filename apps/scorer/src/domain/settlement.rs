//! Pure settlement functions: round facts in, zero-sum payout map out.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::rules;
use crate::domain::state::{GameType, Player, PlayerId, RamschRoundInput, StandardRoundInput};

/// Outcome of settling a declarer-led round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardSettlement {
    pub deltas: BTreeMap<PlayerId, i32>,
    pub declarer_party_won: bool,
    pub schneider: bool,
    pub schwarz: bool,
}

/// Outcome of settling an all-against-all round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamschSettlement {
    pub deltas: BTreeMap<PlayerId, i32>,
    /// Durchmarsch: one player took essentially everything and pays alone.
    pub sweep: bool,
}

/// Roster-complete delta map with every player at zero. Players who did not
/// sit this round keep that zero.
fn zero_deltas(roster: &[Player]) -> BTreeMap<PlayerId, i32> {
    roster.iter().map(|p| (p.id, 0)).collect()
}

/// Settle a declarer-led round against the seated four.
///
/// Assumes the caller has vetted ids (seated members, declarer, partner all
/// on the roster); see the session layer for the vetting.
pub fn settle_standard_round(
    input: &StandardRoundInput,
    roster: &[Player],
) -> StandardSettlement {
    let tariff = rules::base_tariff(input.game_type).unwrap_or(0);

    let declarer_party_won = if input.game_type == GameType::LowBallSolo {
        input.declarer_won
    } else {
        input.declarer_party_points > rules::WIN_THRESHOLD
    };

    // Card points held by whichever side won; the loser holds the rest.
    let winner_points = if declarer_party_won {
        input.declarer_party_points
    } else {
        rules::TOTAL_CARD_POINTS - input.declarer_party_points.min(rules::TOTAL_CARD_POINTS)
    };

    let mut schneider = false;
    let mut schwarz = false;
    let mut value = tariff;
    if rules::has_card_point_bonuses(input.game_type) {
        schneider = winner_points > rules::SCHNEIDER_THRESHOLD;
        schwarz = winner_points == rules::TOTAL_CARD_POINTS;
        if schneider {
            value += rules::BONUS_UNIT;
        }
        // Schwarz is a strict superset of Schneider; both increments stack.
        if schwarz {
            value += rules::BONUS_UNIT;
        }
        if input.running_cards >= rules::running_threshold(input.game_type) {
            value += i32::from(input.running_cards) * rules::BONUS_UNIT;
        }
    }
    if input.doubled {
        value *= 2;
    }
    if input.redoubled {
        value *= 2;
    }

    let mut declaring_party: BTreeSet<PlayerId> = BTreeSet::new();
    declaring_party.insert(input.declarer);
    if input.game_type.is_partnership() {
        if let Some(partner) = input.partner {
            declaring_party.insert(partner);
        }
    }

    // A party of one stakes triple; parties of two or more stake the value
    // per head. With four seats this is the 1-vs-3 / 2-vs-2 split.
    let opposing_len = input.seated.len().saturating_sub(declaring_party.len());
    let declaring_stake = party_stake(declaring_party.len(), value);
    let opposing_stake = party_stake(opposing_len, value);

    let mut deltas = zero_deltas(roster);
    for seat in &input.seated {
        let (stake, won) = if declaring_party.contains(seat) {
            (declaring_stake, declarer_party_won)
        } else {
            (opposing_stake, !declarer_party_won)
        };
        deltas.insert(*seat, if won { stake } else { -stake });
    }

    StandardSettlement {
        deltas,
        declarer_party_won,
        schneider,
        schwarz,
    }
}

fn party_stake(party_size: usize, value: i32) -> i32 {
    if party_size == 1 {
        rules::SOLO_STAKE_FACTOR * value
    } else {
        value
    }
}

/// Settle an all-against-all round.
///
/// The players tied at the maximum card score lose. A lone maximum at or
/// above the sweep threshold inverts the payout: the sweeper pays triple and
/// everyone else collects. Otherwise each winner earns the unit (doubled for
/// a no-trick winner) and the pool is split evenly across the losers, with
/// any integer-division remainder dropped.
pub fn settle_ramsch_round(input: &RamschRoundInput, roster: &[Player]) -> RamschSettlement {
    let points_of = |id: PlayerId| input.card_points.get(&id).copied().unwrap_or(0);

    let mut deltas = zero_deltas(roster);
    let max_score = input.seated.iter().map(|&p| points_of(p)).max().unwrap_or(0);
    let losers: BTreeSet<PlayerId> = input
        .seated
        .iter()
        .copied()
        .filter(|&p| points_of(p) == max_score)
        .collect();

    if losers.len() == 1 && max_score >= rules::SWEEP_THRESHOLD {
        if let Some(&victim) = losers.first() {
            for seat in &input.seated {
                let delta = if *seat == victim {
                    -rules::SOLO_STAKE_FACTOR * rules::RAMSCH_UNIT
                } else {
                    rules::RAMSCH_UNIT
                };
                deltas.insert(*seat, delta);
            }
        }
        return RamschSettlement {
            deltas,
            sweep: true,
        };
    }

    let mut pool = 0i32;
    for winner in input.seated.difference(&losers) {
        let earning = if input.no_trick_players.contains(winner) {
            2 * rules::RAMSCH_UNIT
        } else {
            rules::RAMSCH_UNIT
        };
        deltas.insert(*winner, earning);
        pool += earning;
    }
    if !losers.is_empty() {
        let share = pool / losers.len() as i32;
        for loser in &losers {
            deltas.insert(*loser, -share);
        }
    }

    RamschSettlement {
        deltas,
        sweep: false,
    }
}
