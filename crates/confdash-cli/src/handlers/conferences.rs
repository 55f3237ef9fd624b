use super::{print_empty, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, year: Option<i32>) -> Result<()> {
    let repo = ctx.db()?.conference_instances();

    let names = match year {
        Some(year) => repo.get_conferences_by_year(year)?,
        None => repo.get_all_conferences()?,
    };

    if ctx.is_json() {
        return print_json(&names);
    }

    if names.is_empty() {
        print_empty("No conferences found");
    }
    for name in &names {
        println!("{}", name);
    }

    Ok(())
}
