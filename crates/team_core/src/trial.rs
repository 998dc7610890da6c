//! Randomized trials.
//!
//! A trial deals the roster's rating values into ordered buckets and scores
//! the result by how far apart the bucket averages are. Only rating values
//! move around here; names are bound afterwards by [`crate::resolve`].

use rand::Rng;
use std::cmp::Ordering;

use crate::roster::Rating;

/// Bucket sizes for `players` split into `groups`.
///
/// The first `players % groups` buckets get one extra player.
pub fn group_sizes(players: usize, groups: usize) -> Vec<usize> {
    if groups == 0 {
        return Vec::new();
    }
    let base = players / groups;
    let extra = players % groups;
    (0..groups)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// Sample standard deviation (n - 1 denominator), 0 for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (n - 1.0)).sqrt()
}

/// Average rating of one bucket
pub fn average(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    total as f64 / ratings.len() as f64
}

/// One partition of rating values into ordered buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    buckets: Vec<Vec<Rating>>,
}

impl Candidate {
    /// Deal `ratings` into `groups` buckets.
    ///
    /// Buckets are visited round-robin; each visit takes one of the values
    /// still in the pool, chosen uniformly at random.
    pub fn deal<R: Rng + ?Sized>(ratings: &[Rating], groups: usize, rng: &mut R) -> Self {
        assert!(groups > 0, "cannot deal ratings into zero groups");

        let mut pool = ratings.to_vec();
        let mut buckets: Vec<Vec<Rating>> = group_sizes(ratings.len(), groups)
            .into_iter()
            .map(Vec::with_capacity)
            .collect();

        while !pool.is_empty() {
            for bucket in buckets.iter_mut() {
                if pool.is_empty() {
                    break;
                }
                let pick = rng.gen_range(0..pool.len());
                bucket.push(pool.swap_remove(pick));
            }
        }

        Self { buckets }
    }

    /// Build a candidate from explicit buckets
    pub fn from_buckets(buckets: Vec<Vec<Rating>>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[Vec<Rating>] {
        &self.buckets
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    pub fn averages(&self) -> Vec<f64> {
        self.buckets.iter().map(|b| average(b)).collect()
    }

    /// Balance score: spread of the bucket averages (lower is better)
    pub fn score(&self) -> f64 {
        sample_std_dev(&self.averages())
    }
}

/// A scored candidate tagged with its position in the trial sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub seq: usize,
    pub score: f64,
    pub candidate: Candidate,
}

impl Trial {
    pub fn run<R: Rng + ?Sized>(seq: usize, ratings: &[Rating], groups: usize, rng: &mut R) -> Self {
        let candidate = Candidate::deal(ratings, groups, rng);
        Self {
            seq,
            score: candidate.score(),
            candidate,
        }
    }

    /// Order by score, then by sequence so earlier trials win ties
    pub fn rank(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Lowest-scoring trial, earliest first on ties
pub fn select_best<I: IntoIterator<Item = Trial>>(trials: I) -> Option<Trial> {
    trials.into_iter().min_by(|a, b| a.rank(b))
}

#[cfg(test)]
#[path = "trial_tests.rs"]
mod trial_tests;
