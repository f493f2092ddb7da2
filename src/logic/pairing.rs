//! Swiss pairings: match players with adjacent records in the standings.

use crate::logic::standings::compute_standings;
use crate::models::{Pairing, Standing, TournamentError};
use crate::store::Store;

/// Pair ranked players for the next round.
///
/// 1. Split the standings by alternating position: even indices form group A,
///    odd indices group B (relative order kept in both).
/// 2. Pair the i-th of A with the i-th of B.
///
/// With an odd count the last-ranked player has no partner in B and is left out.
pub fn pair_standings(standings: &[Standing]) -> Vec<Pairing> {
    let group_a = standings.iter().step_by(2);
    let group_b = standings.iter().skip(1).step_by(2);
    let pairings: Vec<Pairing> = group_a
        .zip(group_b)
        .map(|(a, b)| Pairing::between(a, b))
        .collect();

    if standings.len() % 2 == 1 {
        if let Some(left_out) = standings.last() {
            log::warn!(
                "Odd number of players ({}); {} ({}) is not paired this round",
                standings.len(),
                left_out.name,
                left_out.player_id
            );
        }
    }
    pairings
}

/// Pairings for the next round from the current standings.
pub fn compute_pairings<S: Store>(store: &S) -> Result<Vec<Pairing>, TournamentError> {
    let standings = compute_standings(store)?;
    Ok(pair_standings(&standings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: i64, wins: u32) -> Standing {
        Standing {
            player_id: id,
            name: format!("P{id}"),
            wins,
            matches_played: wins,
        }
    }

    #[test]
    fn pairs_rank_neighbours() {
        let ranked = vec![standing(3, 2), standing(1, 1), standing(4, 1), standing(2, 0)];
        let pairs = pair_standings(&ranked);
        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].first_id, pairs[0].second_id), (3, 1));
        assert_eq!((pairs[1].first_id, pairs[1].second_id), (4, 2));
        assert_eq!(pairs[0].first_name, "P3");
        assert_eq!(pairs[1].second_name, "P2");
    }

    #[test]
    fn odd_count_drops_last_ranked() {
        let ranked = vec![standing(1, 1), standing(2, 1), standing(3, 0)];
        let pairs = pair_standings(&ranked);
        assert_eq!(pairs.len(), 1);
        assert!(!pairs[0].involves(3));
    }

    #[test]
    fn no_players_no_pairs() {
        assert!(pair_standings(&[]).is_empty());
        assert!(pair_standings(&[standing(1, 0)]).is_empty());
    }
}
