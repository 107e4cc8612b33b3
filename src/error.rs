use thiserror::Error;

/// Result type alias using [`MeterError`].
pub type Result<T> = std::result::Result<T, MeterError>;

/// Errors that can occur when configuring a balance meter.
#[derive(Debug, Error)]
pub enum MeterError {
    /// A configuration field that must be strictly positive was not.
    #[error("invalid config: {field} must be positive, got {value}")]
    InvalidConfig {
        /// The offending field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
