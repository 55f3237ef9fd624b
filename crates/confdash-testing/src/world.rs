//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory with a bootstrapped database
//! - Seeding conferences, instances, papers, sessions and affiliations
//! - Configuring CLI commands to run against that data directory

use anyhow::{Context, Result};
use assert_cmd::Command;
use confdash_index::Database;
use confdash_types::{ConferenceId, InstanceId};
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use confdash_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_conference("aaai", "AAAI")
///     .with_instance("aaai", 2023)
///     .with_papers("aaai", 2023, 3);
///
/// let repo = world.db().conference_instances();
/// assert_eq!(repo.get_all_years().unwrap(), vec![2023]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    db: Database,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".confdash");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let db = Database::open(&data_dir.join("confdash.db")).expect("Failed to open database");

        Self {
            temp_dir,
            data_dir,
            db,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.confdash).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the database file path inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("confdash.db")
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The store this world seeds.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Set an environment variable for CLI commands.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn with_conference(self, conference_id: &str, name: &str) -> Self {
        self.db
            .insert_conference(&ConferenceId::from(conference_id), name)
            .expect("Failed to insert conference");
        self
    }

    /// Insert an instance directly, copying the conference's current name.
    pub fn with_instance(self, conference_id: &str, year: i32) -> Self {
        self.db
            .conn()
            .execute(
                r#"
                INSERT INTO conference_instances (conference_id, conference_name, year)
                SELECT conference_id, name, ?2 FROM conferences WHERE conference_id = ?1
                "#,
                params![conference_id, year],
            )
            .expect("Failed to insert instance");
        self
    }

    pub fn with_papers(self, conference_id: &str, year: i32, count: usize) -> Self {
        let instance_id = self.instance_id(conference_id, year);
        for n in 0..count {
            self.db
                .conn()
                .execute(
                    "INSERT INTO papers (instance_id, title) VALUES (?1, ?2)",
                    params![instance_id.get(), format!("{} {} paper {}", conference_id, year, n + 1)],
                )
                .expect("Failed to insert paper");
        }
        self
    }

    /// Insert a session and link the named speakers, creating them as needed.
    pub fn with_session(
        self,
        conference_id: &str,
        year: i32,
        title: &str,
        starts_at: &str,
        speakers: &[&str],
    ) -> Self {
        let instance_id = self.instance_id(conference_id, year);
        let conn = self.db.conn();

        conn.execute(
            "INSERT INTO sessions (instance_id, title, track, starts_at) VALUES (?1, ?2, 'Main', ?3)",
            params![instance_id.get(), title, starts_at],
        )
        .expect("Failed to insert session");
        let session_id = conn.last_insert_rowid();

        for name in speakers {
            let existing: Option<i64> = conn
                .query_row(
                    "SELECT speaker_id FROM speakers WHERE name = ?1",
                    [name],
                    |row| row.get(0),
                )
                .optional()
                .expect("Failed to look up speaker");

            let speaker_id = match existing {
                Some(id) => id,
                None => {
                    conn.execute("INSERT INTO speakers (name) VALUES (?1)", [name])
                        .expect("Failed to insert speaker");
                    conn.last_insert_rowid()
                }
            };

            conn.execute(
                "INSERT INTO speaker_to_session (speaker_id, session_id) VALUES (?1, ?2)",
                params![speaker_id, session_id],
            )
            .expect("Failed to link speaker");
        }
        self
    }

    pub fn with_affiliation(self, name: &str, aliases: &[&str]) -> Self {
        let aliases = serde_json::to_string(aliases).expect("Failed to encode aliases");
        self.db
            .conn()
            .execute(
                "INSERT INTO affiliations (name, aliases) VALUES (?1, ?2)",
                params![name, aliases],
            )
            .expect("Failed to insert affiliation");
        self
    }

    /// Id of the first instance for (`conference_id`, `year`).
    pub fn instance_id(&self, conference_id: &str, year: i32) -> InstanceId {
        self.try_instance_id(conference_id, year)
            .expect("Instance not seeded")
    }

    fn try_instance_id(&self, conference_id: &str, year: i32) -> Result<InstanceId> {
        let id: i64 = self
            .db
            .conn()
            .query_row(
                "SELECT MIN(instance_id) FROM conference_instances WHERE conference_id = ?1 AND year = ?2",
                params![conference_id, year],
                |row| row.get::<_, Option<i64>>(0),
            )?
            .with_context(|| format!("no instance for {} {}", conference_id, year))?;

        Ok(InstanceId::new(id))
    }

    /// Count instance rows for (`conference_id`, `year`), duplicates included.
    pub fn instance_rows(&self, conference_id: &str, year: i32) -> usize {
        let count: i64 = self
            .db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM conference_instances WHERE conference_id = ?1 AND year = ?2",
                params![conference_id, year],
                |row| row.get(0),
            )
            .expect("Failed to count instances");
        count as usize
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin!("confdash")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("CONFDASH_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a configured command and capture its output.
    pub fn run(&self, mut cmd: Command, args: &[&str]) -> Result<CliResult> {
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Stdout split into non-empty lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
