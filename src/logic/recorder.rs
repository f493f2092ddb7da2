//! Match recording.

use crate::models::{GameMatch, PlayerId, TournamentError};
use crate::store::Store;

/// Record that `winner` beat `loser`.
///
/// The store appends the match and updates both players' counters as one unit.
/// Unknown ids and `winner == loser` are rejected by the store's constraints and
/// come back as [`TournamentError::Integrity`]; nothing is retried or compensated.
pub fn report_match<S: Store>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<GameMatch, TournamentError> {
    let recorded = store.record_match(winner, loser)?;
    log::info!(
        "Recorded match {}: player {} beat player {}",
        recorded.id,
        winner,
        loser
    );
    Ok(recorded)
}
