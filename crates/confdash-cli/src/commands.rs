use super::args::{AffiliationCommand, Cli, Commands};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging::init_logging;
use anyhow::Result;
use confdash_types::{AffiliationFields, InstanceFields};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level)?;

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.db, cli.format);

    match cli.command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Conferences { year } => handlers::conferences::handle(&ctx, year),

        Commands::Years { conference } => handlers::years::handle(&ctx, conference.as_deref()),

        Commands::Stats { conference, year } => handlers::stats::handle(&ctx, &conference, year),

        Commands::Yearly { year } => handlers::stats::handle_yearly(&ctx, year),

        Commands::Sessions { instance } => handlers::sessions::handle(&ctx, instance),

        Commands::Instance { year, conference } => {
            handlers::instance::handle(&ctx, year, &conference)
        }

        Commands::Upsert {
            conference_id,
            name,
            year,
            location,
            start_date,
            end_date,
            website,
            summary,
        } => {
            let fields = InstanceFields {
                location,
                start_date,
                end_date,
                website,
                summary,
            };
            handlers::instance::handle_upsert(&ctx, &conference_id, &name, year, &fields)
        }

        Commands::Affiliation { command } => match command {
            AffiliationCommand::Show { id } => handlers::affiliation::handle_show(&ctx, id),
            AffiliationCommand::Upsert {
                name,
                aliases,
                country,
            } => {
                let fields = AffiliationFields {
                    aliases: (!aliases.is_empty()).then_some(aliases),
                    country,
                };
                handlers::affiliation::handle_upsert(&ctx, &name, &fields)
            }
            AffiliationCommand::Tracked => handlers::affiliation::handle_tracked(&ctx),
        },
    }
}
