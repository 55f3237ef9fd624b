use crate::config::Config;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use confdash_index::Database;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    db_override: Option<PathBuf>,
    pub format: OutputFormat,
    db: OnceCell<Database>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, db_override: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            db_override,
            format,
            db: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_override {
            Some(path) => Ok(path.clone()),
            None => Ok(self.config()?.database_path(&self.data_dir)),
        }
    }

    pub fn db(&self) -> Result<&Database> {
        self.db.get_or_try_init(|| {
            let db_path = self.db_path()?;
            Database::open(&db_path)
                .with_context(|| format!("Failed to open database: {}", db_path.display()))
        })
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
