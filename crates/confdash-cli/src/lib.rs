// NOTE: confdash layout
//
// - confdash-index owns every SQL statement; handlers only call repository
//   methods and render what comes back.
// - Views that only display data (stats, sessions, single instance) go
//   through `best_effort` so a failing query shows as "no data" with a
//   warning on stderr. Dropdown lists, yearly stats and writes propagate
//   errors and exit non-zero.
// - Logs go to stderr; stdout carries only the rendered view so `--format json`
//   output can be piped.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{AffiliationCommand, Cli, Commands};
pub use commands::run;
