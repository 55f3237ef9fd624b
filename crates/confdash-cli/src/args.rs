use crate::types::{LogLevel, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use confdash_types::YearFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "confdash")]
#[command(about = "Browse conferences, years and paper statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and the database
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Database file (overrides the configured one)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, config file and database
    Init,

    /// List conference names
    Conferences {
        /// Only conferences held in this year
        #[arg(long)]
        year: Option<i32>,
    },

    /// List years with at least one conference instance
    Years {
        /// Only years the named conference was held
        #[arg(long)]
        conference: Option<String>,
    },

    /// Paper counts per instance of one conference
    Stats {
        #[arg(long)]
        conference: String,

        /// A year, or `all`
        #[arg(long, default_value = "all")]
        year: YearFilter,
    },

    /// Paper counts per conference for one year
    Yearly {
        #[arg(long)]
        year: i32,
    },

    /// Sessions of a conference instance, with speakers
    Sessions {
        #[arg(long)]
        instance: i64,
    },

    /// Show the instance of a conference for a year
    Instance {
        #[arg(long)]
        year: i32,

        #[arg(long)]
        conference: String,
    },

    /// Create or update the instance of a conference for a year
    Upsert {
        #[arg(long)]
        conference_id: String,

        /// Conference name recorded on a newly created instance
        #[arg(long)]
        name: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long)]
        website: Option<String>,

        #[arg(long)]
        summary: Option<String>,
    },

    Affiliation {
        #[command(subcommand)]
        command: AffiliationCommand,
    },
}

#[derive(Subcommand)]
pub enum AffiliationCommand {
    /// Show one affiliation by id
    Show { id: i64 },

    /// Create or update an affiliation, matching aliases and spelling variants
    Upsert {
        name: String,

        /// Replace the alias list (repeatable)
        #[arg(long = "alias")]
        aliases: Vec<String>,

        #[arg(long)]
        country: Option<String>,
    },

    /// Tracked organizations (from config.toml) present in the store
    Tracked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_stats_year_defaults_to_all() {
        let cli = Cli::try_parse_from(["confdash", "stats", "--conference", "AAAI"]).unwrap();
        match cli.command {
            Commands::Stats { conference, year } => {
                assert_eq!(conference, "AAAI");
                assert_eq!(year, YearFilter::All);
            }
            _ => panic!("expected stats command"),
        }
    }

    #[test]
    fn test_upsert_parses_dates() {
        let cli = Cli::try_parse_from([
            "confdash",
            "upsert",
            "--conference-id",
            "aaai",
            "--name",
            "AAAI",
            "--year",
            "2025",
            "--start-date",
            "2025-02-25",
        ])
        .unwrap();

        match cli.command {
            Commands::Upsert {
                start_date, end_date, ..
            } => {
                assert_eq!(start_date, NaiveDate::from_ymd_opt(2025, 2, 25));
                assert_eq!(end_date, None);
            }
            _ => panic!("expected upsert command"),
        }
    }

    #[test]
    fn test_bad_year_filter_rejected() {
        assert!(
            Cli::try_parse_from(["confdash", "stats", "--conference", "AAAI", "--year", "soon"])
                .is_err()
        );
    }
}
