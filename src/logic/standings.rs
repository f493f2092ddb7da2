//! Standings: ranking players by their stored win counters.

use crate::models::{Player, Standing, TournamentError};
use crate::store::Store;
use serde::Serialize;

/// Rank players by wins, most first.
///
/// The sort is stable, so players on equal wins keep the order they were given in
/// (registration order when coming from the store).
pub fn rank(players: &[Player]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players.iter().map(Player::standing).collect();
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    standings
}

/// Current standings, recomputed from the store on every call.
///
/// Reads the per-player counters directly; the match log is never re-aggregated here.
pub fn compute_standings<S: Store>(store: &S) -> Result<Vec<Standing>, TournamentError> {
    let players = store.list_players_with_stats()?;
    let standings = rank(&players);
    log::debug!("Computed standings for {} player(s)", standings.len());
    Ok(standings)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    name: &'a str,
    wins: u32,
    matches: u32,
}

/// Standings as CSV with header `id,name,wins,matches`.
pub fn standings_csv<S: Store>(store: &S) -> Result<String, TournamentError> {
    let standings = compute_standings(store)?;
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for s in &standings {
        wtr.serialize(CsvRow {
            id: s.player_id,
            name: &s.name,
            wins: s.wins,
            matches: s.matches_played,
        })?;
    }
    if standings.is_empty() {
        wtr.write_record(["id", "name", "wins", "matches"])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // Every field written above is a `&str` or an integer, so the buffer is UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Verify the counter invariants: every player has `matches == wins + losses`, and
/// total wins and total losses each equal the number of recorded matches.
pub fn audit_counters<S: Store>(store: &S) -> Result<(), TournamentError> {
    let players = store.list_players_with_stats()?;
    if let Some(p) = players.iter().find(|p| !p.counters_consistent()) {
        return Err(TournamentError::InvariantViolation(format!(
            "player {} has {} wins + {} losses but {} matches",
            p.id, p.wins, p.losses, p.matches_played
        )));
    }

    let recorded = store.count_matches()? as u64;
    let wins: u64 = players.iter().map(|p| u64::from(p.wins)).sum();
    let losses: u64 = players.iter().map(|p| u64::from(p.losses)).sum();
    if wins != recorded || losses != recorded {
        return Err(TournamentError::InvariantViolation(format!(
            "{recorded} matches recorded but {wins} wins and {losses} losses counted"
        )));
    }
    Ok(())
}
