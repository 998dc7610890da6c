//! Binding a winning candidate's rating slots back to named players

use rand::Rng;
use std::collections::BTreeMap;

use crate::roster::{Rating, Roster};
use crate::team_set::{team_label, Team};
use crate::trial::Candidate;

/// Turn each rating slot of `candidate` into a player with that rating.
///
/// When several unassigned players share the slot's rating one of them is
/// picked uniformly at random. Every player is bound exactly once because
/// the candidate was dealt from the roster's own ratings.
pub fn bind_players<R: Rng + ?Sized>(roster: &Roster, candidate: &Candidate, rng: &mut R) -> Vec<Team> {
    let mut remaining: BTreeMap<Rating, Vec<&str>> = BTreeMap::new();
    for (name, rating) in roster.iter() {
        remaining.entry(rating).or_default().push(name);
    }

    let mut teams = Vec::with_capacity(candidate.buckets().len());
    for (index, bucket) in candidate.buckets().iter().enumerate() {
        let mut members = Vec::with_capacity(bucket.len());
        for rating in bucket {
            let pool = remaining
                .get_mut(rating)
                .filter(|pool| !pool.is_empty())
                .expect("candidate slot has no unassigned player with its rating");
            let pick = rng.gen_range(0..pool.len());
            members.push(pool.swap_remove(pick).to_string());
        }
        teams.push(Team {
            label: team_label(index),
            members,
        });
    }

    teams
}
