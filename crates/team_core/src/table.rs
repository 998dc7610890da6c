//! Mapping from roster size to the number of teams to build.
//!
//! The club default splits 10-12 players into 2 teams, 13-15 into 3 and
//! 16-20 into 4. Any other size is rejected rather than mapped to a
//! fallback team count.

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, TableError};

/// Roster sizes `min..=max` are split into `groups` teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupRange {
    pub min: usize,
    pub max: usize,
    pub groups: usize,
}

impl GroupRange {
    pub const fn new(min: usize, max: usize, groups: usize) -> Self {
        Self { min, max, groups }
    }

    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

/// Default club ranges
pub const DEFAULT_RANGES: [GroupRange; 3] = [
    GroupRange::new(10, 12, 2),
    GroupRange::new(13, 15, 3),
    GroupRange::new(16, 20, 4),
];

/// Validated, non-overlapping set of [`GroupRange`]s sorted by size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GroupRange>", into = "Vec<GroupRange>")]
pub struct GroupTable {
    ranges: Vec<GroupRange>,
}

impl Default for GroupTable {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_RANGES.to_vec(),
        }
    }
}

impl GroupTable {
    pub fn new(mut ranges: Vec<GroupRange>) -> Result<Self, TableError> {
        if ranges.is_empty() {
            return Err(TableError::Empty);
        }

        for r in &ranges {
            if r.min > r.max {
                return Err(TableError::InvertedRange {
                    min: r.min,
                    max: r.max,
                });
            }
            if r.groups < 2 {
                return Err(TableError::TooFewGroups {
                    min: r.min,
                    max: r.max,
                    groups: r.groups,
                });
            }
            // Every team needs at least one player
            if r.min < r.groups {
                return Err(TableError::NotEnoughPlayers {
                    min: r.min,
                    max: r.max,
                    groups: r.groups,
                });
            }
        }

        ranges.sort_by_key(|r| r.min);
        for pair in ranges.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(TableError::Overlap {
                    first: (pair[0].min, pair[0].max),
                    second: (pair[1].min, pair[1].max),
                });
            }
        }

        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[GroupRange] {
        &self.ranges
    }

    /// Smallest roster size accepted by the table
    pub fn min_size(&self) -> usize {
        self.ranges.first().map_or(0, |r| r.min)
    }

    /// Largest roster size accepted by the table
    pub fn max_size(&self) -> usize {
        self.ranges.last().map_or(0, |r| r.max)
    }

    /// Number of teams for a roster of `size` players
    pub fn group_count(&self, size: usize) -> Result<usize, BalanceError> {
        self.ranges
            .iter()
            .find(|r| r.contains(size))
            .map(|r| r.groups)
            .ok_or(BalanceError::InvalidRosterSize {
                size,
                min: self.min_size(),
                max: self.max_size(),
            })
    }
}

impl TryFrom<Vec<GroupRange>> for GroupTable {
    type Error = TableError;

    fn try_from(ranges: Vec<GroupRange>) -> Result<Self, Self::Error> {
        Self::new(ranges)
    }
}

impl From<GroupTable> for Vec<GroupRange> {
    fn from(table: GroupTable) -> Self {
        table.ranges
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
