use confdash_types::{InstanceId, Session, Speaker};
use rusqlite::Connection;

/// Sessions of an instance with their speakers, fetched in a single query.
pub fn list_with_speakers(conn: &Connection, instance_id: InstanceId) -> crate::Result<Vec<Session>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT s.session_id, s.instance_id, s.title, s.track, s.starts_at, s.room,
               sp.speaker_id, sp.name, sp.affiliation
        FROM sessions s
        LEFT JOIN speaker_to_session ss ON ss.session_id = s.session_id
        LEFT JOIN speakers sp ON sp.speaker_id = ss.speaker_id
        WHERE s.instance_id = ?1
        ORDER BY s.starts_at, s.session_id, sp.name
        "#,
    )?;

    let mut rows = stmt.query([instance_id.get()])?;
    let mut sessions: Vec<Session> = Vec::new();

    while let Some(row) = rows.next()? {
        let session_id: i64 = row.get(0)?;

        // Rows of one session are adjacent thanks to the ORDER BY
        let is_new = sessions.last().is_none_or(|s| s.session_id != session_id);
        if is_new {
            sessions.push(Session {
                session_id,
                instance_id: InstanceId::new(row.get(1)?),
                title: row.get(2)?,
                track: row.get(3)?,
                starts_at: row.get(4)?,
                room: row.get(5)?,
                speakers: Vec::new(),
            });
        }

        if let Some(speaker_id) = row.get::<_, Option<i64>>(6)?
            && let Some(session) = sessions.last_mut()
        {
            session.speakers.push(Speaker {
                speaker_id,
                name: row.get(7)?,
                affiliation: row.get(8)?,
            });
        }
    }

    Ok(sessions)
}
