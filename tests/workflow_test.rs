use git_vtag::cli::{self, run_increment, Cli, Report};
use git_vtag::git::{MemoryTagRepository, TagRepository};
use git_vtag::{Increment, VersionTag, VtagError};

use clap::Parser;

fn scenario_tags() -> MemoryTagRepository {
    let mut repo = MemoryTagRepository::from_tags(
        "c0",
        [
            VersionTag::new(0, 1, 3),
            VersionTag::new(0, 2, 1),
            VersionTag::new(1, 2, 3),
        ],
    );
    repo.set_head("c1");
    repo
}

#[test]
fn test_increment_scenarios() {
    let cases = [
        (Increment::Major, VersionTag::new(2, 0, 0)),
        (Increment::Minor, VersionTag::new(1, 3, 0)),
        (Increment::Patch, VersionTag::new(1, 2, 4)),
    ];

    for (increment, expected) in cases {
        let mut repo = scenario_tags();

        let outcome = run_increment(&mut repo, increment).unwrap();

        assert_eq!(outcome.previous, VersionTag::new(1, 2, 3), "{}", increment);
        assert_eq!(outcome.next, expected, "{}", increment);
        assert!(outcome.created);
        assert_eq!(repo.latest().unwrap(), expected);
        assert_eq!(repo.target_of(&expected.to_string()), Some("c1"));
        assert_eq!(repo.list_tags().unwrap().len(), 4);
    }
}

#[test]
fn test_empty_history_creates_nothing() {
    for increment in [Increment::Major, Increment::Minor, Increment::Patch] {
        let mut repo = MemoryTagRepository::with_head("c1");
        repo.add_reference("release-1", "c1");
        repo.add_reference("v1.2", "c1");

        let err = run_increment(&mut repo, increment).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<VtagError>(),
            Some(VtagError::EmptyHistory)
        ));
        assert!(err.to_string().contains("failed to get latest tag"));
        assert_eq!(repo.reference_names().len(), 2);
    }
}

#[test]
fn test_latest_uses_text_order() {
    let mut repo = MemoryTagRepository::from_tags(
        "c0",
        [VersionTag::new(0, 10, 0), VersionTag::new(0, 2, 0)],
    );

    let outcome = run_increment(&mut repo, Increment::Minor).unwrap();

    assert_eq!(outcome.previous, VersionTag::new(0, 2, 0));
    assert_eq!(outcome.next, VersionTag::new(0, 3, 0));
}

#[test]
fn test_collision_leaves_store_unchanged() {
    // v0.9.0 sorts above v0.10.0, so the minor bump lands on an existing tag
    let mut repo = MemoryTagRepository::from_tags(
        "c0",
        [VersionTag::new(0, 9, 0), VersionTag::new(0, 10, 0)],
    );
    repo.set_head("c1");
    let before = repo.clone();

    let err = run_increment(&mut repo, Increment::Minor).unwrap_err();

    assert!(err
        .downcast_ref::<VtagError>()
        .is_some_and(VtagError::is_tag_exists));
    assert!(err.to_string().contains("failed to create tag v0.10.0"));
    assert_eq!(repo.reference_names(), before.reference_names());
    assert_eq!(repo.target_of("v0.10.0"), Some("c0"));
}

#[test]
fn test_run_dispatches_commands() {
    let mut repo = scenario_tags();
    let cli = Cli::try_parse_from(["git-vtag", "major"]).unwrap();

    match cli::run(&mut repo, &cli).unwrap() {
        Report::Increment(outcome) => assert_eq!(outcome.next, VersionTag::new(2, 0, 0)),
        other => panic!("unexpected report {:?}", other),
    }
    assert_eq!(repo.latest().unwrap(), VersionTag::new(2, 0, 0));
}

#[test]
fn test_run_dry_run_creates_nothing() {
    let mut repo = scenario_tags();
    let cli = Cli::try_parse_from(["git-vtag", "minor", "--dry-run"]).unwrap();

    let report = cli::run(&mut repo, &cli).unwrap();

    match report {
        Report::Increment(outcome) => {
            assert_eq!(outcome.next, VersionTag::new(1, 3, 0));
            assert!(!outcome.created);
        }
        other => panic!("unexpected report {:?}", other),
    }
    assert_eq!(repo.reference_names().len(), 3);
}

#[test]
fn test_run_list_and_latest() {
    let mut repo = scenario_tags();
    repo.add_reference("nightly", "c0");

    let list = Cli::try_parse_from(["git-vtag", "list"]).unwrap();
    assert_eq!(
        cli::run(&mut repo, &list).unwrap(),
        Report::Tags(vec![
            VersionTag::new(0, 1, 3),
            VersionTag::new(0, 2, 1),
            VersionTag::new(1, 2, 3),
        ])
    );

    let latest = Cli::try_parse_from(["git-vtag", "latest"]).unwrap();
    assert_eq!(
        cli::run(&mut repo, &latest).unwrap(),
        Report::Latest(VersionTag::new(1, 2, 3))
    );
}

#[test]
fn test_run_latest_on_empty_repository() {
    let mut repo = MemoryTagRepository::with_head("c1");
    let latest = Cli::try_parse_from(["git-vtag", "latest"]).unwrap();

    let err = cli::run(&mut repo, &latest).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VtagError>(),
        Some(VtagError::EmptyHistory)
    ));
}

#[test]
fn test_overflow_aborts_before_create() {
    let mut repo = MemoryTagRepository::from_tags("c0", [VersionTag::new(1, 2, u64::MAX)]);
    repo.set_head("c1");

    let err = run_increment(&mut repo, Increment::Patch).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<VtagError>(),
        Some(VtagError::Overflow { component: "patch", .. })
    ));
    assert_eq!(repo.reference_names().len(), 1);
}
