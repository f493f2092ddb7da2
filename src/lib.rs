//! Swiss-system tournament: library with models, business logic and the SQLite store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    audit_counters, compute_pairings, compute_standings, count_players, delete_matches,
    delete_players, pair_standings, rank, register_player, report_match, standings_csv,
};
pub use models::{
    GameMatch, MatchId, Pairing, Player, PlayerId, Standing, Tournament, TournamentError,
};
pub use store::{SqliteStore, Store};
