use confdash_types::ConferenceId;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::queries::conference;
use crate::repository::{AffiliationRepository, ConferenceInstanceRepository};
use crate::{Result, schema};

/// Owned connection to a confdash store.
///
/// Opening bootstraps the schema. Repositories borrow the connection through
/// [`Database::conference_instances`] and [`Database::affiliations`], or can be
/// built over [`Database::conn`] directly.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %db_path.display(), "opening database");
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn conference_instances(&self) -> ConferenceInstanceRepository<'_> {
        ConferenceInstanceRepository::new(&self.conn)
    }

    pub fn affiliations(&self) -> AffiliationRepository<'_> {
        AffiliationRepository::new(&self.conn)
    }

    /// Register a conference (or rename an existing one).
    pub fn insert_conference(&self, conference_id: &ConferenceId, name: &str) -> Result<()> {
        conference::insert_or_update(&self.conn, conference_id, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdash_types::InstanceFields;

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();

        assert!(db.conference_instances().get_all_conferences().unwrap().is_empty());
        assert!(db.conference_instances().get_all_years().unwrap().is_empty());
    }

    #[test]
    fn test_insert_conference_renames_existing() {
        let db = Database::open_in_memory().unwrap();
        let id = ConferenceId::from("nips");

        db.insert_conference(&id, "NIPS").unwrap();
        db.insert_conference(&id, "NeurIPS").unwrap();

        let names = db.conference_instances().get_all_conferences().unwrap();
        assert_eq!(names, vec!["NeurIPS".to_string()]);
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let db = Database::open_in_memory().unwrap();

        let result = db.conn().execute(
            "INSERT INTO conference_instances (conference_id, conference_name, year) VALUES ('ghost', 'Ghost', 2020)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/confdash.db");

        let db = Database::open(&db_path).unwrap();
        db.insert_conference(&ConferenceId::from("aaai"), "AAAI").unwrap();
        db.conference_instances()
            .upsert(&ConferenceId::from("aaai"), "AAAI", 2024, &InstanceFields::default())
            .unwrap();

        assert!(db_path.exists());
    }
}
