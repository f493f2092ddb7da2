//! Recorded match results and next-round pairings.

use crate::models::player::{PlayerId, Standing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a recorded match.
pub type MatchId = i64;

/// A single reported match. Immutable once stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub reported_at: DateTime<Utc>,
}

/// Two players drawn against each other for the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

impl Pairing {
    /// Keep only the id/name projection of two standings.
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            first_id: first.player_id,
            first_name: first.name.clone(),
            second_id: second.player_id,
            second_name: second.name.clone(),
        }
    }

    /// Whether `id` plays in this pairing.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.first_id == id || self.second_id == id
    }
}
