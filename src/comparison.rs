//! Movie Comparison
//!
//! Left-to-right, stat-by-stat comparison of two parsed movies.

use crate::models::Side;
use crate::stats::{MovieStats, StatKind};

/// Result for one statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatComparison {
    pub kind: StatKind,
    pub left: Option<u64>,
    pub right: Option<u64>,
    pub winner: Side,
}

/// Per-stat winners for a pair of movies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub stats: Vec<StatComparison>,
}

impl Comparison {
    pub fn winner(&self, kind: StatKind) -> Option<Side> {
        self.stats.iter().find(|s| s.kind == kind).map(|s| s.winner)
    }

    /// Number of stats won by `side`
    pub fn wins(&self, side: Side) -> usize {
        self.stats.iter().filter(|s| s.winner == side).count()
    }
}

/// Right wins only with a strictly greater value; ties stay left
///
/// A missing value ranks below any present one.
pub fn winner(left: Option<u64>, right: Option<u64>) -> Side {
    // Option orders None below Some.
    if right > left {
        Side::Right
    } else {
        Side::Left
    }
}

pub fn compare(left: &MovieStats, right: &MovieStats) -> Comparison {
    let stats = StatKind::ALL
        .iter()
        .map(|&kind| {
            let (l, r) = (left.get(kind), right.get(kind));
            StatComparison {
                kind,
                left: l,
                right: r,
                winner: winner(l, r),
            }
        })
        .collect();
    Comparison { stats }
}
