use std::io::Write;

use bulkcopy_utils::{Record, StoreError};

use super::traits::Sink;

/// Writes each stored record as an `Out:` line.
pub struct ConsoleSink<W> {
    name: String,
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        writeln!(self.out, "Out: {}", record.line)
            .map_err(|e| StoreError::new(&self.name, e.to_string()))
    }
}
