use super::*;

#[test]
fn ratings_follow_name_order() {
    let roster = Roster::from([("Yanis", 7), ("Adam", 3), ("Malik", 5)]);

    assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Adam", "Malik", "Yanis"]);
    assert_eq!(roster.ratings(), vec![3, 5, 7]);
}

#[test]
fn insert_replaces_existing_rating() {
    let mut roster = Roster::new();
    assert_eq!(roster.insert("Sofiane", 4), None);
    assert_eq!(roster.insert("Sofiane", 8), Some(4));

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.rating("Sofiane"), Some(8));
}

#[test]
fn duplicate_ratings_are_kept() {
    let roster = Roster::from([("a", 5), ("b", 5), ("c", 2)]);
    assert_eq!(roster.ratings(), vec![5, 5, 2]);
}

#[test]
fn mean_rating_of_empty_roster() {
    assert_eq!(Roster::new().mean_rating(), None);

    let roster = Roster::from([("a", 2), ("b", 4), ("c", 9)]);
    assert!((roster.mean_rating().unwrap() - 5.0).abs() < 1e-12);
}

#[test]
fn serializes_as_plain_object() {
    let roster = Roster::from([("Nadia", 6), ("Bilal", 9)]);
    let json = serde_json::to_string(&roster).unwrap();
    assert_eq!(json, r#"{"Bilal":9,"Nadia":6}"#);

    let back: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(back, roster);
}
