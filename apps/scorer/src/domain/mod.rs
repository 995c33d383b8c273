//! Domain layer: pure settlement and ledger logic.

pub mod ledger;
pub mod rules;
pub mod session;
pub mod settlement;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_props_session;

// Re-exports for ergonomics
pub use ledger::recompute_totals;
pub use session::GameSession;
pub use settlement::{
    settle_ramsch_round, settle_standard_round, RamschSettlement, StandardSettlement,
};
pub use snapshot::SessionSnapshot;
pub use state::{
    EntryId, GameType, LedgerEntry, Player, PlayerId, RamschRoundInput, SessionState,
    StandardRoundInput,
};
