use confdash_types::{Affiliation, AffiliationFields};
use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};

use crate::Result;

const COLUMNS: &str = "a.affiliation_id, a.name, a.aliases, a.country";

fn from_row(row: &Row<'_>) -> rusqlite::Result<Affiliation> {
    let aliases_json: String = row.get(2)?;
    let aliases = serde_json::from_str(&aliases_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(Affiliation {
        affiliation_id: row.get(0)?,
        name: row.get(1)?,
        aliases,
        country: row.get(3)?,
    })
}

pub fn get_by_id(conn: &Connection, affiliation_id: i64) -> Result<Option<Affiliation>> {
    let result = conn
        .query_row(
            &format!(
                "SELECT {} FROM affiliations a WHERE a.affiliation_id = ?1",
                COLUMNS
            ),
            [affiliation_id],
            from_row,
        )
        .optional()?;

    Ok(result)
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Affiliation>> {
    let result = conn
        .query_row(
            &format!(
                r#"
                SELECT {}
                FROM affiliations a
                WHERE a.name = ?1
                ORDER BY a.affiliation_id
                LIMIT 1
                "#,
                COLUMNS
            ),
            [name],
            from_row,
        )
        .optional()?;

    Ok(result)
}

/// Match a normalized name against primary names and aliases.
pub fn find_by_name_or_alias(conn: &Connection, normalized: &str) -> Result<Option<Affiliation>> {
    let result = conn
        .query_row(
            &format!(
                r#"
                SELECT {}
                FROM affiliations a
                WHERE a.name = ?1
                   OR EXISTS (SELECT 1 FROM json_each(a.aliases) WHERE json_each.value = ?1)
                ORDER BY a.affiliation_id
                LIMIT 1
                "#,
                COLUMNS
            ),
            [normalized],
            from_row,
        )
        .optional()?;

    Ok(result)
}

pub fn insert(conn: &Connection, name: &str, fields: &AffiliationFields) -> Result<i64> {
    let aliases = serde_json::to_string(fields.aliases.as_deref().unwrap_or_default())?;

    conn.execute(
        "INSERT INTO affiliations (name, aliases, country) VALUES (?1, ?2, ?3)",
        params![name, aliases, &fields.country],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn update(conn: &Connection, affiliation_id: i64, fields: &AffiliationFields) -> Result<()> {
    let aliases = fields
        .aliases
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        r#"
        UPDATE affiliations SET
            aliases = COALESCE(?2, aliases),
            country = COALESCE(?3, country)
        WHERE affiliation_id = ?1
        "#,
        params![affiliation_id, aliases, &fields.country],
    )?;

    Ok(())
}

pub fn list(conn: &Connection) -> Result<Vec<Affiliation>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM affiliations a ORDER BY a.affiliation_id",
        COLUMNS
    ))?;

    let affiliations = stmt
        .query_map([], from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(affiliations)
}
