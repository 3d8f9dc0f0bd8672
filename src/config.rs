use std::fmt;

use clap::{ArgAction, Args};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrimError};

/// Phred+33, the encoding written by current Illumina and most other producers.
pub const PHRED_OFFSET: u8 = 33;

/// Settings for the sliding-window scan. Fixed once a [`crate::Trimmer`] is built.
///
/// Derives `clap::Args` so a host command can flatten it into its own parser.
#[derive(Debug, Clone, PartialEq, Args, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimmerConfig {
    /// Minimum mean quality for a window to count as good
    #[arg(long = "qual", default_value_t = 25.0)]
    pub quality_threshold: f64,

    /// Number of bases in each window
    #[arg(long = "window", default_value_t = 5)]
    pub window_size: usize,

    /// Stride between successive windows
    #[arg(long, default_value_t = 1)]
    pub step: usize,

    /// Minimum length of the retained region
    #[arg(long = "min-len", default_value_t = 30)]
    pub min_length: usize,

    /// Do not scan from the left (5') end
    #[arg(long = "no-left", action = ArgAction::SetFalse)]
    pub trim_left: bool,

    /// Do not scan from the right (3') end
    #[arg(long = "no-right", action = ArgAction::SetFalse)]
    pub trim_right: bool,

    /// Offset subtracted from each quality byte (33 for Phred+33, 0 for raw scores)
    #[arg(long = "phred-offset", default_value_t = PHRED_OFFSET)]
    pub phred_offset: u8,
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self {
            quality_threshold: 25.0,
            window_size: 5,
            step: 1,
            min_length: 30,
            trim_left: true,
            trim_right: true,
            phred_offset: PHRED_OFFSET,
        }
    }
}

impl TrimmerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(TrimError::InvalidConfig("window size must be at least 1".into()));
        }
        if self.step == 0 {
            return Err(TrimError::InvalidConfig("step must be at least 1".into()));
        }
        if !self.quality_threshold.is_finite() || self.quality_threshold < 0.0 {
            return Err(TrimError::InvalidConfig(format!(
                "quality threshold must be a non-negative number, got {}",
                self.quality_threshold
            )));
        }
        Ok(())
    }
}

impl fmt::Display for TrimmerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "quality threshold: {}", self.quality_threshold)?;
        writeln!(f, "window size: {}", self.window_size)?;
        writeln!(f, "window step: {}", self.step)?;
        writeln!(f, "minimal length: {}", self.min_length)?;
        writeln!(f, "trim left: {}", self.trim_left)?;
        writeln!(f, "trim right: {}", self.trim_right)?;
        write!(f, "phred offset: {}", self.phred_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        trim: TrimmerConfig,
    }

    #[test]
    fn cli_defaults_match_default_impl() {
        let cli = Cli::try_parse_from(["prog"]).unwrap();
        assert_eq!(cli.trim, TrimmerConfig::default());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "prog", "--qual", "20", "--window", "3", "--step", "2", "--min-len", "5", "--no-left",
        ])
        .unwrap();
        assert_eq!(cli.trim.quality_threshold, 20.0);
        assert_eq!(cli.trim.window_size, 3);
        assert_eq!(cli.trim.step, 2);
        assert_eq!(cli.trim.min_length, 5);
        assert!(!cli.trim.trim_left);
        assert!(cli.trim.trim_right);
    }

    #[test]
    fn display_lists_every_setting() {
        let shown = TrimmerConfig { phred_offset: 64, ..Default::default() }.to_string();
        assert_eq!(shown.lines().count(), 7);
        assert!(shown.contains("quality threshold: 25"));
        assert!(shown.contains("trim left: true"));
        assert!(shown.ends_with("phred offset: 64"));
    }

    #[test]
    fn rejects_zero_window_and_step() {
        let zero_window = TrimmerConfig { window_size: 0, ..Default::default() };
        assert!(matches!(zero_window.validate(), Err(TrimError::InvalidConfig(_))));

        let zero_step = TrimmerConfig { step: 0, ..Default::default() };
        assert!(matches!(zero_step.validate(), Err(TrimError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_negative_or_nan_threshold() {
        for q in [-1.0, f64::NAN, f64::INFINITY] {
            let cfg = TrimmerConfig { quality_threshold: q, ..Default::default() };
            assert!(cfg.validate().is_err(), "threshold {q} accepted");
        }
        let zero = TrimmerConfig { quality_threshold: 0.0, ..Default::default() };
        assert!(zero.validate().is_ok());
    }
}
