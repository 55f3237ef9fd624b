use super::{print_empty, print_field, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use confdash_types::{Affiliation, AffiliationFields};

pub fn handle_show(ctx: &ExecutionContext, id: i64) -> Result<()> {
    let repo = ctx.db()?.affiliations();
    let Some(affiliation) = repo.get_affiliation_by_id(id)? else {
        anyhow::bail!("Affiliation {} not found", id);
    };

    if ctx.is_json() {
        return print_json(&affiliation);
    }

    print_affiliation(&affiliation);
    Ok(())
}

pub fn handle_upsert(ctx: &ExecutionContext, name: &str, fields: &AffiliationFields) -> Result<()> {
    let repo = ctx.db()?.affiliations();
    let affiliation = repo.upsert(name, fields)?;

    if ctx.is_json() {
        return print_json(&affiliation);
    }

    print_affiliation(&affiliation);
    Ok(())
}

pub fn handle_tracked(ctx: &ExecutionContext) -> Result<()> {
    let tracked = &ctx.config()?.tracked_organizations;
    let orgs = ctx.db()?.affiliations().get_tracked_organizations(tracked)?;

    if ctx.is_json() {
        return print_json(&orgs);
    }

    if tracked.is_empty() {
        print_empty("No tracked organizations configured (set tracked_organizations in config.toml)");
    } else if orgs.is_empty() {
        print_empty("No tracked organizations found");
    }
    for org in &orgs {
        println!("{}", org);
    }

    Ok(())
}

fn print_affiliation(affiliation: &Affiliation) {
    print_field("Id", Some(affiliation.affiliation_id));
    print_field("Name", Some(&affiliation.name));
    if !affiliation.aliases.is_empty() {
        print_field("Aliases", Some(affiliation.aliases.join(", ")));
    }
    print_field("Country", affiliation.country.as_ref());
}
