use confdash_types::ConferenceId;
use rusqlite::{Connection, params};

use crate::Result;

pub fn insert_or_update(conn: &Connection, conference_id: &ConferenceId, name: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO conferences (conference_id, name)
        VALUES (?1, ?2)
        ON CONFLICT(conference_id) DO UPDATE SET
            name = ?2
        "#,
        params![conference_id.as_str(), name],
    )?;

    Ok(())
}

pub fn exists(conn: &Connection, conference_id: &ConferenceId) -> Result<bool> {
    let found: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM conferences WHERE conference_id = ?1)",
        [conference_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(found)
}

pub fn list_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT name
        FROM conferences
        ORDER BY name
        "#,
    )?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;

    Ok(names)
}

pub fn list_names_by_year(conn: &Connection, year: i32) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT c.name
        FROM conferences c
        JOIN conference_instances ci ON c.conference_id = ci.conference_id
        WHERE ci.year = ?1
        ORDER BY c.name
        "#,
    )?;

    let names = stmt
        .query_map([year], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;

    Ok(names)
}
