use std::ops::Range;

use bio::io::fastq;
use tracing::{debug, trace};

use crate::config::TrimmerConfig;
use crate::error::Result;
use crate::read::{QualityRead, TrimmedRead};
use crate::summary::TrimSummary;

/// Classification of a single read.
#[must_use = "the outcome says whether and what to keep of the read"]
#[derive(Debug)]
pub enum Outcome<'r, R: ?Sized> {
    /// No window scan moved either boundary; the read is returned as is.
    Passthrough(&'r R),
    /// A shorter region of at least `min_length` bases was kept.
    Trimmed(TrimmedRead<'r, R>),
    /// No good window was found, or the kept region is too short.
    Rejected,
}

impl<'r, R: QualityRead + ?Sized> Outcome<'r, R> {
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Outcome::Passthrough(_))
    }

    pub fn is_trimmed(&self) -> bool {
        matches!(self, Outcome::Trimmed(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected)
    }

    pub fn seq(&self) -> Option<&'r [u8]> {
        match *self {
            Outcome::Passthrough(read) => Some(read.seq()),
            Outcome::Trimmed(view) => Some(view.seq()),
            Outcome::Rejected => None,
        }
    }

    pub fn qual(&self) -> Option<&'r [u8]> {
        match *self {
            Outcome::Passthrough(read) => Some(read.qual()),
            Outcome::Trimmed(view) => Some(view.qual()),
            Outcome::Rejected => None,
        }
    }

    pub fn retained_len(&self) -> usize {
        match self {
            Outcome::Passthrough(read) => read.len(),
            Outcome::Trimmed(view) => view.len(),
            Outcome::Rejected => 0,
        }
    }
}

impl Outcome<'_, fastq::Record> {
    /// Owned record to hand to a writer, `None` for rejected reads.
    pub fn to_record(&self) -> Option<fastq::Record> {
        match *self {
            Outcome::Passthrough(read) => Some(read.clone()),
            Outcome::Trimmed(view) => Some(view.to_record()),
            Outcome::Rejected => None,
        }
    }
}

/// Sliding-window quality trimmer.
///
/// The left scan walks window starts `0, step, 2*step, ...` and keeps the first
/// window whose mean quality reaches the threshold. The right scan walks window
/// ends `len, len-step, ...` down to `window_size` and keeps the first match
/// from the right. Every call updates the running [`TrimSummary`].
///
/// Not meant to be shared between threads while evaluating; give each worker
/// its own trimmer and merge the summaries afterwards.
#[derive(Debug, Clone)]
pub struct Trimmer {
    config: TrimmerConfig,
    stats: TrimSummary,
}

impl Trimmer {
    pub fn new(config: TrimmerConfig) -> Result<Self> {
        config.validate()?;
        debug!(%config, "quality trimmer configured");
        Ok(Self { config, stats: TrimSummary::default() })
    }

    pub fn config(&self) -> &TrimmerConfig {
        &self.config
    }

    pub fn summary(&self) -> TrimSummary {
        self.stats
    }

    pub fn mean_quality(&self) -> Result<f64> {
        self.stats.mean_quality()
    }

    pub fn evaluate<'r, R: QualityRead + ?Sized>(&mut self, read: &'r R) -> Outcome<'r, R> {
        let qual = read.qual();
        debug_assert_eq!(read.seq().len(), qual.len(), "seq and qual lengths differ");
        let len = qual.len();

        self.stats.total += 1;
        self.stats.qual_mean_sum += self.mean_phred(qual);

        let Some(kept) = self.retained_range(qual) else {
            return self.reject(len);
        };

        if kept.start == 0 && kept.end == len {
            self.stats.untrimmed += 1;
            trace!(len, "read untrimmed");
            return Outcome::Passthrough(read);
        }

        // with step > 1 the two scans visit different windows and may cross
        if kept.end >= kept.start && kept.len() >= self.config.min_length {
            self.stats.trimmed += 1;
            self.stats.base_trimmed += (len - kept.len()) as u64;
            trace!(len, start = kept.start, end = kept.end, "read trimmed");
            Outcome::Trimmed(TrimmedRead::new(read, kept))
        } else {
            trace!(len, start = kept.start, end = kept.end, "trimmed region too short");
            self.reject(len)
        }
    }

    fn reject<'r, R: ?Sized>(&mut self, len: usize) -> Outcome<'r, R> {
        self.stats.fail += 1;
        self.stats.base_trimmed += len as u64;
        trace!(len, "read rejected");
        Outcome::Rejected
    }

    /// `None` when an enabled scan finds no good window. A failed left scan
    /// skips the right scan.
    fn retained_range(&self, qual: &[u8]) -> Option<Range<usize>> {
        let start = if self.config.trim_left { self.find_start(qual)? } else { 0 };
        let end = if self.config.trim_right { self.find_end(qual)? } else { qual.len() };
        Some(start..end)
    }

    fn find_start(&self, qual: &[u8]) -> Option<usize> {
        let w = self.config.window_size;
        let last = qual.len().checked_sub(w)?;
        (0..=last)
            .step_by(self.config.step)
            .find(|&i| self.window_passes(&qual[i..i + w]))
    }

    fn find_end(&self, qual: &[u8]) -> Option<usize> {
        let w = self.config.window_size;
        if qual.len() < w {
            return None;
        }
        (w..=qual.len())
            .rev()
            .step_by(self.config.step)
            .find(|&i| self.window_passes(&qual[i - w..i]))
    }

    fn window_passes(&self, window: &[u8]) -> bool {
        self.mean_phred(window) >= self.config.quality_threshold
    }

    // empty input counts as 0.0 so one empty read cannot turn the running sum into NaN
    fn mean_phred(&self, qual: &[u8]) -> f64 {
        if qual.is_empty() {
            return 0.0;
        }
        let offset = self.config.phred_offset;
        let sum: u64 = qual.iter().map(|&q| u64::from(q.saturating_sub(offset))).sum();
        sum as f64 / qual.len() as f64
    }
}
