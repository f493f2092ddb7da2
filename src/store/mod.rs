//! Persistence boundary: the `Store` trait and its SQLite implementation.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::models::{GameMatch, Player, PlayerId, TournamentError};

/// Durable record of players and matches.
///
/// Implementations must apply `record_match` and `reset_matches` atomically: the
/// match log and the per-player counters are never observed out of step.
pub trait Store {
    /// Insert a player with zeroed counters and return its new id.
    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Append a match and bump the winner's wins/matches and the loser's
    /// losses/matches, all in one transaction.
    fn record_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<GameMatch, TournamentError>;

    /// All players with their counters, in id order.
    fn list_players_with_stats(&self) -> Result<Vec<Player>, TournamentError>;

    /// All matches, in the order they were reported.
    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError>;

    /// Delete every match and zero every player's counters.
    fn reset_matches(&mut self) -> Result<(), TournamentError>;

    /// Delete every player; their matches go with them.
    fn reset_players(&mut self) -> Result<(), TournamentError>;

    fn count_players(&self) -> Result<usize, TournamentError>;

    fn count_matches(&self) -> Result<usize, TournamentError>;
}
