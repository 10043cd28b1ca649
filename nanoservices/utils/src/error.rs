use thiserror::Error;

/// Failure of a single `Source::pull` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PullError {
    /// The source has no more data. This is the normal end of a copy.
    #[error("source exhausted")]
    Exhausted,

    /// The source could not produce a record.
    #[error("{cause}")]
    Transient { origin: String, cause: String },
}

impl PullError {
    pub fn transient(origin: impl Into<String>, cause: impl Into<String>) -> Self {
        PullError::Transient {
            origin: origin.into(),
            cause: cause.into(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, PullError::Exhausted)
    }
}

/// Failure of a single `Sink::store` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cause}")]
pub struct StoreError {
    pub sink: String,
    pub cause: String,
}

impl StoreError {
    pub fn new(sink: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            sink: sink.into(),
            cause: cause.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no more data")]
    Exhausted,

    #[error("Pull Error ({origin}): {cause}")]
    TransientFailure { origin: String, cause: String },

    #[error("Store Error ({sink}): {cause}")]
    WriteFailure { sink: String, cause: String },

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Pipeline Error: {0}")]
    Build(String),
}

impl Error {
    /// True only for the clean end-of-data signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Exhausted)
    }
}

impl From<PullError> for Error {
    fn from(err: PullError) -> Self {
        match err {
            PullError::Exhausted => Error::Exhausted,
            PullError::Transient { origin, cause } => Error::TransientFailure { origin, cause },
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::WriteFailure {
            sink: err.sink,
            cause: err.cause,
        }
    }
}
