use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Schema notes
//
// - conference_instances carries no UNIQUE(conference_id, year): the upsert
//   path keeps one row per pair by looking up before writing.
// - conference_name on an instance is a copy of the name passed to the upsert
//   that created it and is never rewritten afterwards.
// - Dates are ISO 8601 TEXT (YYYY-MM-DD); aliases are a JSON array of strings.
// - A database stamped with another non-zero user_version is refused rather
//   than rebuilt, since these tables are the only copy of the data.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != 0 && current_version != SCHEMA_VERSION {
        return Err(Error::SchemaMismatch {
            found: current_version,
            expected: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS conferences (
            conference_id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS conference_instances (
            instance_id INTEGER PRIMARY KEY AUTOINCREMENT,
            conference_id TEXT NOT NULL,
            conference_name TEXT NOT NULL,
            year INTEGER NOT NULL,
            location TEXT,
            start_date TEXT,
            end_date TEXT,
            website TEXT,
            summary TEXT,
            FOREIGN KEY (conference_id) REFERENCES conferences(conference_id)
        );

        CREATE TABLE IF NOT EXISTS papers (
            paper_id INTEGER PRIMARY KEY AUTOINCREMENT,
            instance_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            FOREIGN KEY (instance_id) REFERENCES conference_instances(instance_id)
        );

        CREATE TABLE IF NOT EXISTS sessions (
            session_id INTEGER PRIMARY KEY AUTOINCREMENT,
            instance_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            track TEXT,
            starts_at TEXT,
            room TEXT,
            FOREIGN KEY (instance_id) REFERENCES conference_instances(instance_id)
        );

        CREATE TABLE IF NOT EXISTS speakers (
            speaker_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            affiliation TEXT
        );

        CREATE TABLE IF NOT EXISTS speaker_to_session (
            speaker_id INTEGER NOT NULL,
            session_id INTEGER NOT NULL,
            PRIMARY KEY (speaker_id, session_id),
            FOREIGN KEY (speaker_id) REFERENCES speakers(speaker_id),
            FOREIGN KEY (session_id) REFERENCES sessions(session_id)
        );

        CREATE TABLE IF NOT EXISTS affiliations (
            affiliation_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            aliases TEXT NOT NULL DEFAULT '[]',
            country TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_conferences_name ON conferences(name);
        CREATE INDEX IF NOT EXISTS idx_instances_conference_year ON conference_instances(conference_id, year);
        CREATE INDEX IF NOT EXISTS idx_instances_year ON conference_instances(year DESC);
        CREATE INDEX IF NOT EXISTS idx_papers_instance ON papers(instance_id);
        CREATE INDEX IF NOT EXISTS idx_sessions_instance ON sessions(instance_id);
        CREATE INDEX IF NOT EXISTS idx_affiliations_name ON affiliations(name);
        "#,
    )?;

    conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;

    Ok(())
}
