use super::*;

fn registry() -> MemberRegistry {
    let mut reg = MemberRegistry::default();
    reg.add("Adam", 6).unwrap();
    reg.add("Nadia", 8).unwrap();
    reg.add("Karim", 3).unwrap();
    reg
}

#[test]
fn add_keeps_members_sorted() {
    let reg = registry();
    let names: Vec<&str> = reg.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Adam", "Karim", "Nadia"]);
}

#[test]
fn add_trims_and_rejects_empty_names() {
    let mut reg = MemberRegistry::default();
    reg.add("  Ines ", 5).unwrap();
    assert_eq!(reg.get("Ines"), Some(5));

    assert!(matches!(reg.add("   ", 5), Err(ClubError::EmptyName)));
}

#[test]
fn add_rejects_duplicates() {
    let mut reg = registry();
    let err = reg.add("Nadia", 2).unwrap_err();
    assert!(matches!(err, ClubError::DuplicateMember(ref n) if n == "Nadia"));
    assert_eq!(reg.get("Nadia"), Some(8));
}

#[test]
fn ratings_must_be_within_bounds() {
    let mut reg = registry();
    assert!(matches!(
        reg.add("Zoe", 11),
        Err(ClubError::RatingOutOfRange { rating: 11, min: 1, max: 10, .. })
    ));
    assert!(matches!(reg.rate("Adam", 0), Err(ClubError::RatingOutOfRange { .. })));
    assert_eq!(reg.get("Adam"), Some(6));
}

#[test]
fn rate_updates_existing_member() {
    let mut reg = registry();
    assert_eq!(reg.rate("Karim", 7).unwrap(), 3);
    assert_eq!(reg.get("Karim"), Some(7));

    assert!(matches!(reg.rate("Nobody", 5), Err(ClubError::UnknownMember(_))));
}

#[test]
fn remove_deletes_member() {
    let mut reg = registry();
    assert_eq!(reg.remove("Adam").unwrap(), 6);
    assert_eq!(reg.len(), 2);
    assert!(matches!(reg.remove("Adam"), Err(ClubError::UnknownMember(_))));
}

#[test]
fn select_builds_roster_of_present_members() {
    let reg = registry();
    let roster = reg.select(["Nadia", "Adam", "Nadia"]).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.rating("Adam"), Some(6));

    assert!(matches!(
        reg.select(["Adam", "Ghost"]),
        Err(ClubError::UnknownMember(ref n)) if n == "Ghost"
    ));
}

#[test]
fn custom_bounds() {
    assert!(RatingBounds::new(5, 1).is_err());

    let bounds = RatingBounds::new(0, 100).unwrap();
    let mut reg = MemberRegistry::new(bounds);
    assert_eq!(reg.bounds(), bounds);
    reg.add("Elo", 85).unwrap();

    let roster = Roster::from([("a", 150)]);
    assert!(MemberRegistry::with_members(roster, bounds).is_err());
}
