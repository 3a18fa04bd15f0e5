use thiserror::Error;

/// Gauge construction failures.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GaugeError {
    /// Full-scale value must be finite and strictly positive
    #[error("gauge max value must be finite and > 0, got {0}")]
    InvalidMaxValue(f32),
}

/// Reasons a probe result line yields no throughput number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The probe itself reported a failure ("<Direction> error: ...")
    #[error("probe reported an error: {0}")]
    ProbeReported(String),

    /// No `:` separating the direction from the reading
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    /// Nothing after the separator
    #[error("missing reading after ':' in {0:?}")]
    MissingValue(String),

    /// Token after the separator is not a number
    #[error("invalid throughput number {0:?}")]
    InvalidNumber(String),
}

/// A run could not be started.
#[derive(Debug, Error)]
pub enum StartError {
    /// Trigger is disabled while a run is in flight
    #[error("a run is already in progress")]
    AlreadyRunning,

    /// Background thread could not be created
    #[error("failed to spawn background task: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Binary setup failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid --log-level: {0}")]
    LogLevel(#[from] log::ParseLevelError),

    #[error("gauge setup: {0}")]
    Gauge(#[from] GaugeError),

    #[error("invalid --scale {0}: must be at least 1")]
    Scale(u32),
}
