use enough::StopReason;

/// Errors from pixel configuration decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[cfg(feature = "std")]
    #[error("configuration file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),

    #[error("invalid configuration size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[cfg(feature = "std")]
    #[error("failed to read configuration: {0}")]
    IoFailure(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for ConfigError {
    fn from(r: StopReason) -> Self {
        ConfigError::Cancelled(r)
    }
}
