//! SQLite-backed store: schema provisioning and transactional writes.

use crate::models::{GameMatch, Player, PlayerId, TournamentError};
use crate::store::Store;
use chrono::Utc;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::path::Path;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS players (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    fullname TEXT    NOT NULL,
    wins     INTEGER NOT NULL DEFAULT 0 CHECK (wins >= 0),
    losses   INTEGER NOT NULL DEFAULT 0 CHECK (losses >= 0),
    matches  INTEGER NOT NULL DEFAULT 0,
    CHECK (matches = wins + losses)
);

CREATE TABLE IF NOT EXISTS matches (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    winner_id   INTEGER NOT NULL REFERENCES players (id) ON DELETE CASCADE,
    loser_id    INTEGER NOT NULL REFERENCES players (id) ON DELETE CASCADE,
    reported_at TEXT    NOT NULL,
    CHECK (winner_id <> loser_id)
);
";

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
                TournamentError::Integrity {
                    message: msg.unwrap_or_else(|| e.to_string()),
                }
            }
            other => TournamentError::Store(other),
        }
    }
}

/// Store over a single long-lived SQLite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        let conn = Connection::open(path.as_ref())?;
        log::debug!("Opened tournament database at {}", path.as_ref().display());
        Self::from_connection(conn)
    }

    /// Ephemeral store, gone when dropped.
    pub fn open_in_memory() -> Result<Self, TournamentError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, TournamentError> {
        // SQLite leaves foreign keys off unless asked, per connection.
        conn.pragma_update(None, "foreign_keys", true)?;
        create_schema(&mut conn)?;
        Ok(Self { conn })
    }
}

fn create_schema(conn: &mut Connection) -> Result<(), TournamentError> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;
    tx.commit()?;
    Ok(())
}

fn player_from_row(row: &Row<'_>) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        losses: row.get(3)?,
        matches_played: row.get(4)?,
    })
}

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<GameMatch> {
    Ok(GameMatch {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        reported_at: row.get(3)?,
    })
}

impl Store for SqliteStore {
    fn add_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.conn
            .execute("INSERT INTO players (fullname) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn record_match(
        &mut self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<GameMatch, TournamentError> {
        let reported_at = Utc::now();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO matches (winner_id, loser_id, reported_at) VALUES (?1, ?2, ?3)",
            params![winner, loser, reported_at],
        )?;
        let id = tx.last_insert_rowid();

        let won = tx.execute(
            "UPDATE players SET wins = wins + 1, matches = matches + 1 WHERE id = ?1",
            params![winner],
        )?;
        let lost = tx.execute(
            "UPDATE players SET losses = losses + 1, matches = matches + 1 WHERE id = ?1",
            params![loser],
        )?;
        if won != 1 || lost != 1 {
            // Dropping `tx` rolls the insert back.
            return Err(TournamentError::Integrity {
                message: format!("match references unknown player ({winner} beat {loser})"),
            });
        }
        tx.commit()?;

        Ok(GameMatch {
            id,
            winner_id: winner,
            loser_id: loser,
            reported_at,
        })
    }

    fn list_players_with_stats(&self) -> Result<Vec<Player>, TournamentError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, fullname, wins, losses, matches FROM players ORDER BY id")?;
        let players = stmt
            .query_map([], player_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(players)
    }

    fn list_matches(&self) -> Result<Vec<GameMatch>, TournamentError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, winner_id, loser_id, reported_at FROM matches ORDER BY id")?;
        let matches = stmt
            .query_map([], match_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(matches)
    }

    fn reset_matches(&mut self) -> Result<(), TournamentError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM matches", [])?;
        tx.execute("UPDATE players SET wins = 0, losses = 0, matches = 0", [])?;
        tx.commit()?;
        log::debug!("Removed {} match record(s)", removed);
        Ok(())
    }

    fn reset_players(&mut self) -> Result<(), TournamentError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM players", [])?;
        tx.commit()?;
        log::debug!("Removed {} player(s)", removed);
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    fn count_matches(&self) -> Result<usize, TournamentError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_idempotent_on_reopen() {
        let dir = std::env::temp_dir().join(format!("swiss-schema-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("t.db");
        let _ = std::fs::remove_file(&path);

        let mut store = SqliteStore::open(&path).unwrap();
        store.add_player("Alice").unwrap();
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count_players().unwrap(), 1);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn check_constraint_rejects_inconsistent_counters() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.add_player("Alice").unwrap();
        let err = store
            .conn
            .execute("UPDATE players SET wins = 1 WHERE id = ?1", params![id])
            .map_err(TournamentError::from)
            .unwrap_err();
        assert!(matches!(err, TournamentError::Integrity { .. }));
    }

    #[test]
    fn failed_record_leaves_no_match_row() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let a = store.add_player("Alice").unwrap();
        assert!(store.record_match(a, 999).is_err());
        assert_eq!(store.count_matches().unwrap(), 0);
        let players = store.list_players_with_stats().unwrap();
        assert_eq!(players[0].wins, 0);
        assert_eq!(players[0].matches_played, 0);
    }
}
