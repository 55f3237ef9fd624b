//! Ready-made catalogs shared by the index and CLI test suites.

use crate::TestWorld;

/// Three conferences, four instances, papers and a small session schedule.
///
/// | conference | year | papers | sessions |
/// |------------|------|--------|----------|
/// | AAAI       | 2022 | 5      | -        |
/// | AAAI       | 2023 | 0      | -        |
/// | NeurIPS    | 2021 | 1      | -        |
/// | NeurIPS    | 2023 | 2      | 3        |
///
/// ICML is registered but has no instance.
pub fn sample_catalog() -> TestWorld {
    TestWorld::new()
        .with_conference("aaai", "AAAI")
        .with_conference("neurips", "NeurIPS")
        .with_conference("icml", "ICML")
        .with_instance("aaai", 2022)
        .with_papers("aaai", 2022, 5)
        .with_instance("aaai", 2023)
        .with_instance("neurips", 2021)
        .with_papers("neurips", 2021, 1)
        .with_instance("neurips", 2023)
        .with_papers("neurips", 2023, 2)
        .with_session(
            "neurips",
            2023,
            "Panel: Scaling Laws",
            "2023-12-11T11:00",
            &["Grace Hopper", "Alan Turing"],
        )
        .with_session(
            "neurips",
            2023,
            "Opening Keynote",
            "2023-12-11T09:00",
            &["Ada Lovelace"],
        )
        .with_session("neurips", 2023, "Poster Session", "2023-12-11T14:00", &[])
}

/// Affiliations with aliases, for normalization and tracking tests.
pub fn sample_affiliations() -> TestWorld {
    TestWorld::new()
        .with_affiliation("MIT", &["Massachusetts Institute of Technology"])
        .with_affiliation("Alphabet", &["Google", "DeepMind"])
        .with_affiliation("Stanford University", &[])
}
