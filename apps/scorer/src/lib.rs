#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::session::GameSession;
pub use domain::snapshot::SessionSnapshot;
pub use domain::state::{
    EntryId, GameType, LedgerEntry, Player, PlayerId, RamschRoundInput, SessionState,
    StandardRoundInput,
};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorer_test_support::logging::init();
}
