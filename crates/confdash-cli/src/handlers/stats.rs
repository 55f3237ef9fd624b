use super::{print_empty, print_heading, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use confdash_index::best_effort;
use confdash_types::YearFilter;

pub fn handle(ctx: &ExecutionContext, conference: &str, year: YearFilter) -> Result<()> {
    let repo = ctx.db()?.conference_instances();
    let stats = best_effort(
        "conference stats",
        repo.get_conference_stats(conference, year),
    );

    if ctx.is_json() {
        return print_json(&stats);
    }

    print_heading(&format!("{} ({})", conference, year));
    if stats.is_empty() {
        print_empty("No statistics available");
        return Ok(());
    }

    println!("{:<6} {:>8}  {}", "Year", "Papers", "Location");
    for row in &stats {
        println!(
            "{:<6} {:>8}  {}",
            row.instance.year,
            row.paper_count,
            row.instance.location.as_deref().unwrap_or("-")
        );
    }

    let total: u64 = stats.iter().map(|s| s.paper_count).sum();
    println!("{:<6} {:>8}", "Total", total);

    Ok(())
}

pub fn handle_yearly(ctx: &ExecutionContext, year: i32) -> Result<()> {
    let repo = ctx.db()?.conference_instances();
    let stats = repo.get_yearly_conference_stats(year)?;

    if ctx.is_json() {
        return print_json(&stats);
    }

    print_heading(&format!("Conferences in {}", year));
    if stats.is_empty() {
        print_empty("No conferences held that year");
        return Ok(());
    }

    let width = stats
        .iter()
        .map(|s| s.conference_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Conference".len());

    println!("{:<width$} {:>8}", "Conference", "Papers", width = width);
    for row in &stats {
        println!(
            "{:<width$} {:>8}",
            row.conference_name,
            row.paper_count,
            width = width
        );
    }

    Ok(())
}
