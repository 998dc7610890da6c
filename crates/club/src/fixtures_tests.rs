use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use team_core::{team_label, Team};

fn team_set(count: usize) -> TeamSet {
    TeamSet {
        teams: (0..count)
            .map(|i| Team {
                label: team_label(i),
                members: vec![format!("p{}", i)],
            })
            .collect(),
        score: 0.0,
    }
}

#[test]
fn four_teams_play_two_matches() {
    let teams = team_set(4);
    let fixtures = draw_fixtures(&teams, &mut StdRng::seed_from_u64(4));

    assert_eq!(fixtures.len(), 2);
    let mut playing = BTreeSet::new();
    for f in &fixtures {
        assert!(playing.insert(f.home.clone()));
        assert!(playing.insert(f.away.clone()));
    }
    let labels: BTreeSet<String> = teams.labels().map(String::from).collect();
    assert_eq!(playing, labels);
}

#[test]
fn two_teams_play_each_other() {
    let fixtures = draw_fixtures(&team_set(2), &mut StdRng::seed_from_u64(1));
    assert_eq!(fixtures.len(), 1);

    let pair: BTreeSet<&str> = [fixtures[0].home.as_str(), fixtures[0].away.as_str()].into();
    assert_eq!(pair, ["Team A", "Team B"].into());
}

#[test]
fn three_teams_get_no_fixtures() {
    assert!(draw_fixtures(&team_set(3), &mut StdRng::seed_from_u64(1)).is_empty());
}

#[test]
fn pairings_vary_with_seed() {
    let teams = team_set(4);
    let mut seen = BTreeSet::new();
    for seed in 0..32 {
        let fixtures = draw_fixtures(&teams, &mut StdRng::seed_from_u64(seed));
        let mut pair = [fixtures[0].home.clone(), fixtures[0].away.clone()];
        pair.sort();
        seen.insert(pair);
    }
    assert!(seen.len() > 1);
}
