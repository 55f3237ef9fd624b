use super::{print_empty, print_field, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use confdash_index::best_effort;
use confdash_types::{ConferenceId, ConferenceInstance, InstanceFields};
use tracing::info;

pub fn handle(ctx: &ExecutionContext, year: i32, conference: &str) -> Result<()> {
    let repo = ctx.db()?.conference_instances();
    let instance = best_effort(
        "instance lookup",
        repo.get_instance_by_year_and_name(year, conference),
    );

    if ctx.is_json() {
        return print_json(&instance);
    }

    match instance {
        Some(instance) => print_instance(&instance),
        None => print_empty(&format!("No instance of {} in {}", conference, year)),
    }

    Ok(())
}

pub fn handle_upsert(
    ctx: &ExecutionContext,
    conference_id: &str,
    name: &str,
    year: i32,
    fields: &InstanceFields,
) -> Result<()> {
    let repo = ctx.db()?.conference_instances();
    let instance = repo.upsert(&ConferenceId::from(conference_id), name, year, fields)?;
    info!(instance_id = %instance.instance_id, conference_id, year, "instance saved");

    if ctx.is_json() {
        return print_json(&instance);
    }

    print_instance(&instance);
    Ok(())
}

fn print_instance(instance: &ConferenceInstance) {
    print_field("Instance", Some(instance.instance_id));
    print_field("Conference", Some(format!(
        "{} ({})",
        instance.conference_name, instance.conference_id
    )));
    print_field("Year", Some(instance.year));
    print_field("Location", instance.location.as_ref());
    print_field("Starts", instance.start_date);
    print_field("Ends", instance.end_date);
    print_field("Website", instance.website.as_ref());
    print_field("Summary", instance.summary.as_ref());
}
