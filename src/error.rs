use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrimError {
    /// A configuration value would make the window scan degenerate.
    #[error("invalid trimmer configuration: {0}")]
    InvalidConfig(String),

    /// Mean quality asked for before any read was evaluated.
    #[error("mean quality is undefined: no reads have been evaluated")]
    NoReads,
}

pub type Result<T> = std::result::Result<T, TrimError>;
