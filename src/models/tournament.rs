//! Tournament service object and TournamentError.

use crate::logic;
use crate::models::game::{GameMatch, Pairing};
use crate::models::player::{PlayerId, Standing};
use crate::store::Store;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Player name was empty after trimming.
    #[error("Player name must not be empty")]
    EmptyName,
    /// The store rejected a write: unknown player id, self-match, or another constraint.
    #[error("Integrity violation: {message}")]
    Integrity { message: String },
    /// The store could not be reached or failed to execute the operation.
    #[error("Store error: {0}")]
    Store(#[source] rusqlite::Error),
    /// Derived counters disagree with each other or with the match log. A bug, never expected.
    #[error("Counter invariant violated: {0}")]
    InvariantViolation(String),
    /// Standings could not be written as CSV.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),
}

/// A single Swiss tournament: owns the long-lived store handle and exposes every
/// operation the host process (web server, tests) drives.
#[derive(Debug)]
pub struct Tournament<S> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a player (name is trimmed and need not be unique). Returns the assigned id.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        logic::register_player(&mut self.store, name)
    }

    /// Number of players currently registered.
    pub fn count_players(&self) -> Result<usize, TournamentError> {
        logic::count_players(&self.store)
    }

    /// Players ranked by wins (descending), ties in registration order.
    pub fn player_standings(&self) -> Result<Vec<Standing>, TournamentError> {
        logic::compute_standings(&self.store)
    }

    /// Standings as CSV (`id,name,wins,matches`).
    pub fn standings_csv(&self) -> Result<String, TournamentError> {
        logic::standings_csv(&self.store)
    }

    /// Record a match outcome; counters are updated in the same transaction.
    pub fn report_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<GameMatch, TournamentError> {
        logic::report_match(&mut self.store, winner, loser)
    }

    /// Every recorded match, oldest first.
    pub fn matches(&self) -> Result<Vec<GameMatch>, TournamentError> {
        self.store.list_matches()
    }

    /// Pairings for the next round.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        logic::compute_pairings(&self.store)
    }

    /// Remove all matches and zero every player's counters.
    pub fn delete_matches(&mut self) -> Result<(), TournamentError> {
        logic::delete_matches(&mut self.store)
    }

    /// Remove all players (and, by cascade, all matches).
    pub fn delete_players(&mut self) -> Result<(), TournamentError> {
        logic::delete_players(&mut self.store)
    }

    /// Check the counter invariants against the match log.
    pub fn audit(&self) -> Result<(), TournamentError> {
        logic::audit_counters(&self.store)
    }
}
