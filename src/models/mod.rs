//! Data structures for the Swiss tournament: players, standings, matches, pairings.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, Pairing};
pub use player::{Player, PlayerId, Standing};
pub use tournament::{Tournament, TournamentError};
