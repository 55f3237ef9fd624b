use confdash_types::{ConferenceId, ConferenceInstance, InstanceFields, InstanceId};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{Error, Result};

/// Column list matching `from_row`, for tables aliased as `ci`.
pub(crate) const COLUMNS: &str = "ci.instance_id, ci.conference_id, ci.conference_name, ci.year, \
     ci.location, ci.start_date, ci.end_date, ci.website, ci.summary";

/// Number of columns in `COLUMNS`.
pub(crate) const COLUMN_COUNT: usize = 9;

pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<ConferenceInstance> {
    Ok(ConferenceInstance {
        instance_id: InstanceId::new(row.get(0)?),
        conference_id: ConferenceId::from(row.get::<_, String>(1)?),
        conference_name: row.get(2)?,
        year: row.get(3)?,
        location: row.get(4)?,
        start_date: row.get(5)?,
        end_date: row.get(6)?,
        website: row.get(7)?,
        summary: row.get(8)?,
    })
}

pub fn get_by_id(conn: &Connection, instance_id: InstanceId) -> Result<Option<ConferenceInstance>> {
    let result = conn
        .query_row(
            &format!(
                "SELECT {} FROM conference_instances ci WHERE ci.instance_id = ?1",
                COLUMNS
            ),
            [instance_id.get()],
            from_row,
        )
        .optional()?;

    Ok(result)
}

fn find_id(conn: &Connection, conference_id: &ConferenceId, year: i32) -> Result<Option<i64>> {
    let id = conn
        .query_row(
            r#"
            SELECT instance_id
            FROM conference_instances
            WHERE conference_id = ?1 AND year = ?2
            ORDER BY instance_id
            LIMIT 1
            "#,
            params![conference_id.as_str(), year],
            |row| row.get(0),
        )
        .optional()?;

    Ok(id)
}

/// Create or update the instance for (`conference_id`, `year`) in one transaction.
pub fn upsert(
    conn: &Connection,
    conference_id: &ConferenceId,
    name: &str,
    year: i32,
    fields: &InstanceFields,
) -> Result<ConferenceInstance> {
    let tx = conn.unchecked_transaction()?;

    if !super::conference::exists(&tx, conference_id)? {
        return Err(Error::ConferenceNotFound(conference_id.clone()));
    }

    let instance_id = match find_id(&tx, conference_id, year)? {
        Some(id) => {
            tx.execute(
                r#"
                UPDATE conference_instances SET
                    location = COALESCE(?2, location),
                    start_date = COALESCE(?3, start_date),
                    end_date = COALESCE(?4, end_date),
                    website = COALESCE(?5, website),
                    summary = COALESCE(?6, summary)
                WHERE instance_id = ?1
                "#,
                params![
                    id,
                    &fields.location,
                    &fields.start_date,
                    &fields.end_date,
                    &fields.website,
                    &fields.summary
                ],
            )?;
            id
        }
        None => {
            tx.execute(
                r#"
                INSERT INTO conference_instances
                    (conference_id, conference_name, year, location, start_date, end_date, website, summary)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    conference_id.as_str(),
                    name,
                    year,
                    &fields.location,
                    &fields.start_date,
                    &fields.end_date,
                    &fields.website,
                    &fields.summary
                ],
            )?;
            tx.last_insert_rowid()
        }
    };

    let instance = get_by_id(&tx, InstanceId::new(instance_id))?
        .ok_or(Error::Database(rusqlite::Error::QueryReturnedNoRows))?;

    tx.commit()?;
    Ok(instance)
}

pub fn list_years(conn: &Connection) -> Result<Vec<i32>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT year
        FROM conference_instances
        ORDER BY year DESC
        "#,
    )?;

    let years = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<i32>, rusqlite::Error>>()?;

    Ok(years)
}

pub fn list_years_for_conference(conn: &Connection, conference_name: &str) -> Result<Vec<i32>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT ci.year
        FROM conference_instances ci
        JOIN conferences c ON c.conference_id = ci.conference_id
        WHERE c.name = ?1
        ORDER BY ci.year DESC
        "#,
    )?;

    let years = stmt
        .query_map([conference_name], |row| row.get(0))?
        .collect::<std::result::Result<Vec<i32>, rusqlite::Error>>()?;

    Ok(years)
}

pub fn get_by_year_and_name(
    conn: &Connection,
    year: i32,
    conference_name: &str,
) -> Result<Option<ConferenceInstance>> {
    let result = conn
        .query_row(
            &format!(
                r#"
                SELECT {}
                FROM conference_instances ci
                WHERE ci.year = ?1 AND ci.conference_name = ?2
                ORDER BY ci.instance_id
                LIMIT 1
                "#,
                COLUMNS
            ),
            params![year, conference_name],
            from_row,
        )
        .optional()?;

    Ok(result)
}
