//! Registration and bulk reset of players and matches.

use crate::models::{PlayerId, TournamentError};
use crate::store::Store;

/// Register a player under the trimmed `name`. Names need not be unique.
pub fn register_player<S: Store>(store: &mut S, name: &str) -> Result<PlayerId, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    let id = store.add_player(name)?;
    log::info!("Registered player {} ({})", id, name);
    Ok(id)
}

pub fn count_players<S: Store>(store: &S) -> Result<usize, TournamentError> {
    let n = store.count_players()?;
    log::debug!("Number of players: {}", n);
    Ok(n)
}

/// Remove every match record and zero all player counters, so standings go back to all-tied.
pub fn delete_matches<S: Store>(store: &mut S) -> Result<(), TournamentError> {
    store.reset_matches()?;
    log::info!("Cleared all matches and reset player records");
    Ok(())
}

/// Remove every player; matches go with them.
pub fn delete_players<S: Store>(store: &mut S) -> Result<(), TournamentError> {
    store.reset_players()?;
    log::info!("Cleared all players");
    Ok(())
}
