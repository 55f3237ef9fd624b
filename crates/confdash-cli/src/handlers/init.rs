use crate::config::Config;
use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use confdash_index::SCHEMA_VERSION;
use serde_json::json;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let data_dir = ctx.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let config_path = ctx.config_path();
    let config_created = !config_path.exists();
    if config_created {
        Config::default().save_to(&config_path)?;
    }

    let db_path = ctx.db_path()?;
    let db = ctx.db()?;
    let conferences = db.conference_instances().get_all_conferences()?.len();

    if ctx.is_json() {
        return super::print_json(&json!({
            "data_dir": data_dir,
            "config": config_path,
            "config_created": config_created,
            "database": db_path,
            "schema_version": SCHEMA_VERSION,
            "conferences": conferences,
        }));
    }

    println!("Data directory: {}", data_dir.display());
    if config_created {
        println!("Config:         {} (created)", config_path.display());
    } else {
        println!("Config:         {}", config_path.display());
    }
    println!(
        "Database:       {} (schema v{}, {} conferences)",
        db_path.display(),
        SCHEMA_VERSION,
        conferences
    );

    Ok(())
}
