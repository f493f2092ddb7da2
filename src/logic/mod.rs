//! Tournament business logic: registration, standings, pairings, match recording.

mod pairing;
mod recorder;
mod registration;
mod standings;

pub use pairing::{compute_pairings, pair_standings};
pub use recorder::report_match;
pub use registration::{count_players, delete_matches, delete_players, register_player};
pub use standings::{audit_counters, compute_standings, rank, standings_csv};
