use confdash_testing::fixtures::sample_catalog;
use confdash_types::InstanceId;

#[test]
fn test_sessions_ordered_with_speakers_attached() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();
    let instance_id = world.instance_id("neurips", 2023);

    let sessions = repo.get_sessions_by_instance(instance_id).unwrap();
    let titles: Vec<&str> = sessions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Opening Keynote", "Panel: Scaling Laws", "Poster Session"]
    );

    assert_eq!(sessions[0].speaker_names(), vec!["Ada Lovelace"]);
    assert_eq!(
        sessions[1].speaker_names(),
        vec!["Alan Turing", "Grace Hopper"]
    );
    assert!(sessions[2].speakers.is_empty());
    assert!(sessions.iter().all(|s| s.instance_id == instance_id));
}

#[test]
fn test_speaker_shared_across_sessions() {
    let world = sample_catalog().with_session(
        "neurips",
        2023,
        "Closing Remarks",
        "2023-12-11T17:00",
        &["Ada Lovelace"],
    );
    let repo = world.db().conference_instances();

    let sessions = repo
        .get_sessions_by_instance(world.instance_id("neurips", 2023))
        .unwrap();
    assert_eq!(sessions.len(), 4);

    let keynote = &sessions[0].speakers[0];
    let closing = &sessions[3].speakers[0];
    assert_eq!(sessions[3].title, "Closing Remarks");
    assert_eq!(keynote.speaker_id, closing.speaker_id);
}

#[test]
fn test_sessions_for_instance_without_schedule() {
    let world = sample_catalog();
    let repo = world.db().conference_instances();

    assert!(
        repo.get_sessions_by_instance(world.instance_id("aaai", 2022))
            .unwrap()
            .is_empty()
    );
    assert!(
        repo.get_sessions_by_instance(InstanceId::new(9_999))
            .unwrap()
            .is_empty()
    );
}
