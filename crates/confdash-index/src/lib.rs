// SQLite conference store
// Read-mostly lookups and paper-count aggregation over conferences,
// their yearly instances, papers and sessions.

mod best_effort;
mod db;
mod error;
mod queries;
mod repository;
mod schema;

// Public API
pub use best_effort::best_effort;
pub use db::Database;
pub use error::{Error, Result};
pub use repository::{AffiliationRepository, ConferenceInstanceRepository};
pub use schema::SCHEMA_VERSION;
