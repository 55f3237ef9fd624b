//! Dropdown and statistics queries against the shared sample catalog.

use confdash_index::{ConferenceInstanceRepository, best_effort};
use confdash_testing::fixtures::sample_catalog;
use confdash_types::YearFilter;

#[test]
fn test_all_conferences_sorted_alphabetically() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert_eq!(
        repo.get_all_conferences().unwrap(),
        vec!["AAAI", "ICML", "NeurIPS"]
    );
}

#[test]
fn test_all_years_distinct_and_descending() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert_eq!(repo.get_all_years().unwrap(), vec![2023, 2022, 2021]);
}

#[test]
fn test_conferences_by_year() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert_eq!(
        repo.get_conferences_by_year(2023).unwrap(),
        vec!["AAAI", "NeurIPS"]
    );
    assert_eq!(repo.get_conferences_by_year(2022).unwrap(), vec!["AAAI"]);
    assert!(repo.get_conferences_by_year(1999).unwrap().is_empty());
}

#[test]
fn test_conferences_by_year_deduplicates_repeated_instances() {
    // Two rows for the same (conference, year) can exist after a racing upsert
    let world = sample_catalog().with_instance("aaai", 2023);
    assert_eq!(world.instance_rows("aaai", 2023), 2);

    let repo = world.db().conference_instances();
    assert_eq!(
        repo.get_conferences_by_year(2023).unwrap(),
        vec!["AAAI", "NeurIPS"]
    );
    assert_eq!(repo.get_conference_years("AAAI").unwrap(), vec![2023, 2022]);
}

#[test]
fn test_conference_years_match_instances() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert_eq!(repo.get_conference_years("NeurIPS").unwrap(), vec![2023, 2021]);
    assert_eq!(repo.get_conference_years("AAAI").unwrap(), vec![2023, 2022]);
    assert!(repo.get_conference_years("ICML").unwrap().is_empty());
    assert!(repo.get_conference_years("Unknown").unwrap().is_empty());
}

#[test]
fn test_conference_years_strictly_descending() {
    let world = sample_catalog()
        .with_instance("icml", 2019)
        .with_instance("icml", 2024)
        .with_instance("icml", 2020);
    let repo = world.db().conference_instances();

    let years = repo.get_conference_years("ICML").unwrap();
    assert_eq!(years, vec![2024, 2020, 2019]);
    assert!(years.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_conference_stats_includes_zero_paper_instances() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    let stats = repo.get_conference_stats("AAAI", YearFilter::All).unwrap();
    let rows: Vec<(i32, u64)> = stats
        .iter()
        .map(|s| (s.instance.year, s.paper_count))
        .collect();

    assert_eq!(rows, vec![(2023, 0), (2022, 5)]);
    assert!(stats.iter().all(|s| s.instance.conference_name == "AAAI"));
}

#[test]
fn test_conference_stats_year_filter() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    let stats = repo
        .get_conference_stats("AAAI", YearFilter::Year(2022))
        .unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].instance.year, 2022);
    assert_eq!(stats[0].paper_count, 5);
    assert_eq!(stats[0].instance.instance_id, world.instance_id("aaai", 2022));

    let parsed: YearFilter = "All Years".parse().unwrap();
    assert_eq!(repo.get_conference_stats("AAAI", parsed).unwrap().len(), 2);
}

#[test]
fn test_conference_stats_unknown_conference_is_empty() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert!(
        repo.get_conference_stats("Unknown", YearFilter::All)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_conference_stats_failure_is_swallowed_by_best_effort() {
    let world = sample_catalog();
    world.db().conn().execute_batch("DROP TABLE papers").unwrap();

    let repo = world.db().conference_instances();
    let result = repo.get_conference_stats("AAAI", YearFilter::All);
    assert!(result.is_err());

    let stats = best_effort("conference stats", result);
    assert!(stats.is_empty());
}

#[test]
fn test_yearly_conference_stats() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    let stats = repo.get_yearly_conference_stats(2023).unwrap();
    let rows: Vec<(&str, u64)> = stats
        .iter()
        .map(|s| (s.conference_name.as_str(), s.paper_count))
        .collect();

    assert_eq!(rows, vec![("AAAI", 0), ("NeurIPS", 2)]);
    assert!(repo.get_yearly_conference_stats(1999).unwrap().is_empty());
}

#[test]
fn test_yearly_conference_stats_propagates_errors() {
    let world = sample_catalog();
    world.db().conn().execute_batch("DROP TABLE papers").unwrap();

    let repo = world.db().conference_instances();
    let err = repo.get_yearly_conference_stats(2023).unwrap_err();
    assert!(err.to_string().contains("no such table"));
}

#[test]
fn test_instance_by_year_and_name() {
    let world = sample_catalog();
    let repo = ConferenceInstanceRepository::new(world.db().conn());

    let instance = repo
        .get_instance_by_year_and_name(2021, "NeurIPS")
        .unwrap()
        .expect("NeurIPS 2021 should exist");
    assert_eq!(instance.instance_id, world.instance_id("neurips", 2021));
    assert_eq!(instance.conference_id.as_str(), "neurips");

    assert!(
        repo.get_instance_by_year_and_name(1999, "Unknown")
            .unwrap()
            .is_none()
    );
}
