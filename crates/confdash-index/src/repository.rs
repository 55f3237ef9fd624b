use confdash_types::{
    Affiliation, AffiliationFields, ConferenceId, ConferenceInstance, ConferencePaperCount,
    InstanceFields, InstanceId, InstancePaperCount, Session, YearFilter,
    normalize_affiliation_name,
};
use rusqlite::Connection;
use tracing::debug;

use crate::Result;
use crate::queries::{affiliation, conference, instance, session, stats};

/// Lookup and aggregation queries over conferences and their yearly instances.
///
/// Borrows a connection owned by the caller. Every method is a single
/// round trip except `upsert`, which runs its read and write in one
/// transaction and commits before returning.
pub struct ConferenceInstanceRepository<'c> {
    conn: &'c Connection,
}

impl<'c> ConferenceInstanceRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Create the instance for (`conference_id`, `year`) or overwrite the
    /// fields set in `fields` on the existing one.
    ///
    /// Fails with [`crate::Error::ConferenceNotFound`] when the conference
    /// does not exist; nothing is written in that case.
    pub fn upsert(
        &self,
        conference_id: &ConferenceId,
        name: &str,
        year: i32,
        fields: &InstanceFields,
    ) -> Result<ConferenceInstance> {
        debug!(%conference_id, year, "upserting conference instance");
        instance::upsert(self.conn, conference_id, name, year, fields)
    }

    /// Distinct conference names, ascending.
    pub fn get_all_conferences(&self) -> Result<Vec<String>> {
        conference::list_names(self.conn)
    }

    /// Distinct instance years, newest first.
    pub fn get_all_years(&self) -> Result<Vec<i32>> {
        instance::list_years(self.conn)
    }

    /// Names of conferences holding an instance in `year`, ascending.
    pub fn get_conferences_by_year(&self, year: i32) -> Result<Vec<String>> {
        conference::list_names_by_year(self.conn, year)
    }

    /// Years the named conference has an instance for, newest first.
    pub fn get_conference_years(&self, conference_name: &str) -> Result<Vec<i32>> {
        instance::list_years_for_conference(self.conn, conference_name)
    }

    /// Paper count per instance of the named conference, newest first.
    ///
    /// Instances without papers are included with a count of zero.
    pub fn get_conference_stats(
        &self,
        conference_name: &str,
        year: YearFilter,
    ) -> Result<Vec<InstancePaperCount>> {
        debug!(conference_name, %year, "loading conference stats");
        stats::paper_counts_by_instance(self.conn, conference_name, year)
    }

    /// Paper count per conference for every conference held in `year`.
    pub fn get_yearly_conference_stats(&self, year: i32) -> Result<Vec<ConferencePaperCount>> {
        debug!(year, "loading yearly conference stats");
        stats::paper_counts_by_conference(self.conn, year)
    }

    /// Sessions of an instance with speakers already attached.
    pub fn get_sessions_by_instance(&self, instance_id: InstanceId) -> Result<Vec<Session>> {
        debug!(%instance_id, "loading sessions");
        session::list_with_speakers(self.conn, instance_id)
    }

    pub fn get_instance_by_year_and_name(
        &self,
        year: i32,
        conference_name: &str,
    ) -> Result<Option<ConferenceInstance>> {
        instance::get_by_year_and_name(self.conn, year, conference_name)
    }

    pub fn get_instance(&self, instance_id: InstanceId) -> Result<Option<ConferenceInstance>> {
        instance::get_by_id(self.conn, instance_id)
    }
}

/// Affiliation lookups with name normalization on upsert.
pub struct AffiliationRepository<'c> {
    conn: &'c Connection,
}

impl<'c> AffiliationRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn get_affiliation_by_id(&self, affiliation_id: i64) -> Result<Option<Affiliation>> {
        affiliation::get_by_id(self.conn, affiliation_id)
    }

    /// Update the affiliation known as `name` (exactly, or after
    /// normalization by primary name or alias), or insert a new one.
    pub fn upsert(&self, name: &str, fields: &AffiliationFields) -> Result<Affiliation> {
        let tx = self.conn.unchecked_transaction()?;

        let existing = match affiliation::find_by_name(&tx, name)? {
            Some(found) => Some(found),
            None => affiliation::find_by_name_or_alias(&tx, &normalize_affiliation_name(name))?,
        };

        let affiliation_id = match existing {
            Some(found) => {
                debug!(name, matched = %found.name, "updating affiliation");
                affiliation::update(&tx, found.affiliation_id, fields)?;
                found.affiliation_id
            }
            None => {
                debug!(name, "inserting affiliation");
                affiliation::insert(&tx, name, fields)?
            }
        };

        let result = affiliation::get_by_id(&tx, affiliation_id)?
            .ok_or(crate::Error::Database(rusqlite::Error::QueryReturnedNoRows))?;

        tx.commit()?;
        Ok(result)
    }

    /// Tracked organization names represented in the store, deduplicated
    /// and sorted.
    pub fn get_tracked_organizations(&self, tracked: &[String]) -> Result<Vec<String>> {
        let mut orgs: Vec<String> = affiliation::list(self.conn)?
            .iter()
            .filter_map(|a| a.tracked_name(tracked).map(str::to_string))
            .collect();

        orgs.sort();
        orgs.dedup();
        Ok(orgs)
    }
}
