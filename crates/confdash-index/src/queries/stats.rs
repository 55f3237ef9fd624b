use confdash_types::{ConferencePaperCount, InstancePaperCount, YearFilter};
use rusqlite::Connection;

use super::instance::{COLUMNS, COLUMN_COUNT, from_row};
use crate::Result;

pub fn paper_counts_by_instance(
    conn: &Connection,
    conference_name: &str,
    year: YearFilter,
) -> Result<Vec<InstancePaperCount>> {
    let mut where_clauses = vec!["c.name = ?"];
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(conference_name.to_string())];

    if let Some(year) = year.year() {
        where_clauses.push("ci.year = ?");
        params.push(Box::new(year));
    }

    let query = format!(
        r#"
        SELECT {}, COUNT(p.paper_id)
        FROM conferences c
        JOIN conference_instances ci ON c.conference_id = ci.conference_id
        LEFT JOIN papers p ON ci.instance_id = p.instance_id
        WHERE {}
        GROUP BY ci.instance_id
        ORDER BY ci.year DESC
        "#,
        COLUMNS,
        where_clauses.join(" AND ")
    );

    let mut stmt = conn.prepare(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let counts = stmt
        .query_map(param_refs.as_slice(), |row| {
            Ok(InstancePaperCount {
                instance: from_row(row)?,
                paper_count: row.get::<_, i64>(COLUMN_COUNT)? as u64,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(counts)
}

pub fn paper_counts_by_conference(conn: &Connection, year: i32) -> Result<Vec<ConferencePaperCount>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT c.name, COUNT(p.paper_id)
        FROM conferences c
        JOIN conference_instances ci ON c.conference_id = ci.conference_id
        LEFT JOIN papers p ON ci.instance_id = p.instance_id
        WHERE ci.year = ?1
        GROUP BY c.name
        ORDER BY c.name
        "#,
    )?;

    let counts = stmt
        .query_map([year], |row| {
            Ok(ConferencePaperCount {
                conference_name: row.get(0)?,
                paper_count: row.get::<_, i64>(1)? as u64,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(counts)
}
