use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = ClubConfig::parse("").unwrap();
    assert_eq!(config, ClubConfig::default());
    assert_eq!(config.members_path, PathBuf::from("members.json"));
    assert_eq!(config.balance.trials, 10_000);
    assert_eq!(config.ratings, RatingBounds { min: 1, max: 10 });
}

#[test]
fn parses_all_sections() {
    let config = ClubConfig::parse(
        r#"
        members_path = "data/members.json"

        [ratings]
        min = 0
        max = 20

        [balance]
        trials = 500
        seed = 42
        parallel = true

        [[balance.groups]]
        min = 6
        max = 9
        groups = 2
        "#,
    )
    .unwrap();

    assert_eq!(config.members_path, PathBuf::from("data/members.json"));
    assert_eq!(config.ratings, RatingBounds { min: 0, max: 20 });
    assert_eq!(config.balance.trials, 500);
    assert_eq!(config.balance.seed, Some(42));
    assert!(config.balance.parallel);

    let balancer = config.balance.balancer_config().unwrap();
    assert_eq!(balancer.trials, 500);
    assert_eq!(balancer.table.group_count(8), Ok(2));
    assert!(balancer.table.group_count(10).is_err());
}

#[test]
fn rejects_unknown_keys() {
    assert!(ClubConfig::parse("[balance]\ntrails = 5\n").is_err());
}

#[test]
fn rejects_unknown_rating_keys() {
    assert!(ClubConfig::parse("[ratings]\nmaximum = 5\n").is_err());
}

#[test]
fn rejects_unknown_group_range_keys() {
    let err = ClubConfig::parse(
        r#"
        [[balance.groups]]
        min = 10
        max = 12
        groups = 2
        grups = 3
        "#,
    );
    assert!(err.is_err());
}

#[test]
fn validate_catches_bad_values() {
    let mut config = ClubConfig::default();
    config.ratings = RatingBounds { min: 9, max: 2 };
    assert!(matches!(config.validate(), Err(ClubError::InvalidBounds { .. })));

    let mut config = ClubConfig::default();
    config.balance.groups = Some(vec![GroupRange::new(10, 12, 1)]);
    assert!(matches!(config.validate(), Err(ClubError::Table(_))));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClubConfig::load(&dir.path().join("club.toml")).unwrap();
    assert_eq!(config, ClubConfig::default());
}

#[test]
fn load_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("club.toml");
    std::fs::write(&path, "members_path = [").unwrap();

    let err = ClubConfig::load(&path).unwrap_err();
    assert!(matches!(err, ClubError::Config { .. }));
    assert!(err.to_string().contains("club.toml"));
}
