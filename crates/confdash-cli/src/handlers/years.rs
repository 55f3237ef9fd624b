use super::{print_empty, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, conference: Option<&str>) -> Result<()> {
    let repo = ctx.db()?.conference_instances();

    let years = match conference {
        Some(name) => repo.get_conference_years(name)?,
        None => repo.get_all_years()?,
    };

    if ctx.is_json() {
        return print_json(&years);
    }

    if years.is_empty() {
        print_empty("No years found");
    }
    for year in &years {
        println!("{}", year);
    }

    Ok(())
}
