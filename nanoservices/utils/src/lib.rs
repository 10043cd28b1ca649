pub mod error;

use error::Error;

pub use error::{PullError, StoreError};

pub type BulkCopyResult<T> = Result<T, Error>;

/// A single unit of data moved from a source to a sink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub line: String,
}

impl Record {
    pub fn new(line: impl Into<String>) -> Self {
        Record { line: line.into() }
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Record::new(line)
    }
}

impl From<String> for Record {
    fn from(line: String) -> Self {
        Record { line }
    }
}
