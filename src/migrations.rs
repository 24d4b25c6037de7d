//! Schema setup for the exercises database.
//!
//! SQL files under `migrations/` are baked in with `include_str!`.

use std::collections::HashSet;

use rusqlite::Connection;

use crate::db::DbPool;

/// Ordered `(name, sql)` pairs; names are what `_migrations` records.
pub const MIGRATIONS: &[(&str, &str)] = &[(
    "001_create_exercises.sql",
    include_str!("../migrations/001_create_exercises.sql"),
)];

/// Names of migrations already recorded in `_migrations`, creating that
/// table on first use.
fn applied_migrations(conn: &Connection) -> rusqlite::Result<HashSet<String>> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );",
    )?;

    let mut stmt = conn.prepare("SELECT name FROM _migrations")?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<HashSet<String>>>()?;
    Ok(names)
}

/// Brings the schema up to date at startup. Each migration runs at most once
/// per database file.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let conn = pool.get()?;
    let applied = applied_migrations(&conn)?;

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|(name, _)| !applied.contains(*name))
        .collect();
    tracing::info!(
        "{} migration(s) pending, {} already applied",
        pending.len(),
        applied.len()
    );

    for (name, sql) in pending {
        tracing::info!("Applying migration {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO _migrations (name) VALUES (?)", [name])?;
    }

    Ok(())
}

/// Applies every migration without bookkeeping. Only meant for a database
/// that was just created, such as an in-memory test pool.
pub fn run_migrations_untracked(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    MIGRATIONS
        .iter()
        .try_for_each(|(_, sql)| conn.execute_batch(sql))?;
    Ok(())
}

/// Delete every exercise and restart the id sequence at 1.
pub fn reset_exercises(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;
    conn.execute_batch(
        "DELETE FROM exercises;
         DELETE FROM sqlite_sequence WHERE name = 'exercises';",
    )?;
    Ok(())
}
