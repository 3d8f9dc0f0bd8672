use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrimError};

/// Running counters of a [`crate::Trimmer`].
///
/// Summaries from independent trimmers merge by field-wise addition, so reads
/// can be sharded across workers and the results folded back together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrimSummary {
    pub total: u64,
    pub untrimmed: u64,
    pub trimmed: u64,
    pub fail: u64,
    /// Bases discarded across trimmed and failed reads.
    pub base_trimmed: u64,
    /// Sum of per-read mean qualities, not divided by `total`.
    pub qual_mean_sum: f64,
}

impl TrimSummary {
    pub fn merge(&mut self, other: &TrimSummary) {
        self.total += other.total;
        self.untrimmed += other.untrimmed;
        self.trimmed += other.trimmed;
        self.fail += other.fail;
        self.base_trimmed += other.base_trimmed;
        self.qual_mean_sum += other.qual_mean_sum;
    }

    pub fn mean_quality(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(TrimError::NoReads);
        }
        Ok(self.qual_mean_sum / self.total as f64)
    }

    /// Every evaluated read landed in exactly one outcome bucket.
    pub fn is_consistent(&self) -> bool {
        self.total == self.untrimmed + self.trimmed + self.fail
    }
}

impl AddAssign for TrimSummary {
    fn add_assign(&mut self, rhs: TrimSummary) {
        self.merge(&rhs);
    }
}

impl Add for TrimSummary {
    type Output = TrimSummary;

    fn add(mut self, rhs: TrimSummary) -> TrimSummary {
        self += rhs;
        self
    }
}

impl Sum for TrimSummary {
    fn sum<I: Iterator<Item = TrimSummary>>(iter: I) -> TrimSummary {
        iter.fold(TrimSummary::default(), Add::add)
    }
}

impl<'a> Sum<&'a TrimSummary> for TrimSummary {
    fn sum<I: Iterator<Item = &'a TrimSummary>>(iter: I) -> TrimSummary {
        iter.copied().sum()
    }
}
