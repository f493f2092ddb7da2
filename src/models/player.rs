//! Player and Standing data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store on registration.
pub type PlayerId = i64;

/// A registered player with the win/loss counters maintained by the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Always `wins + losses`; kept as its own column so reads never re-aggregate.
    pub matches_played: u32,
}

impl Player {
    /// True when `matches_played == wins + losses`.
    pub fn counters_consistent(&self) -> bool {
        self.wins.checked_add(self.losses) == Some(self.matches_played)
    }

    /// Ranked view of this player (for standings).
    pub fn standing(&self) -> Standing {
        Standing::from_player(self)
    }
}

/// A player's ranked record at a point in time. Derived, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl Standing {
    pub fn from_player(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.name.clone(),
            wins: p.wins,
            matches_played: p.matches_played,
        }
    }
}
