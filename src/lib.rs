//! Sliding-window quality trimming of sequencing reads.
//!
//! A [`Trimmer`] scans each read from the left and/or right end for the first
//! window whose mean quality reaches a threshold, keeps the region between the
//! two boundaries and classifies the read as passed through, trimmed or
//! rejected. Running counters are kept in a [`TrimSummary`].
//!
//! ```
//! use bio::io::fastq;
//! use slidetrim::{Outcome, Trimmer, TrimmerConfig};
//!
//! let mut trimmer = Trimmer::new(TrimmerConfig {
//!     quality_threshold: 20.0,
//!     window_size: 3,
//!     min_length: 4,
//!     ..Default::default()
//! })?;
//! let rec = fastq::Record::with_attrs("r1", None, b"ACGTACGTAC", b"&&&IIIII&&");
//! match trimmer.evaluate(&rec) {
//!     Outcome::Trimmed(view) => assert_eq!(view.seq(), b"GTACGTA"),
//!     _ => unreachable!(),
//! }
//! assert_eq!(trimmer.summary().base_trimmed, 3);
//! # Ok::<(), slidetrim::TrimError>(())
//! ```

pub mod config;
pub mod error;
pub mod read;
pub mod summary;
pub mod trim;

pub use config::{TrimmerConfig, PHRED_OFFSET};
pub use error::{Result, TrimError};
pub use read::{QualityRead, TrimmedRead};
pub use summary::TrimSummary;
pub use trim::{Outcome, Trimmer};
