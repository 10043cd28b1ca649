use bulkcopy_utils::{Record, StoreError};

use super::traits::Sink;

/// Collects stored records in memory. Can be told to fail on its n-th
/// `store` call (1-indexed).
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    name: String,
    records: Vec<Record>,
    calls: usize,
    fail_on: Option<usize>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        self.calls += 1;
        if self.fail_on == Some(self.calls) {
            return Err(StoreError::new(
                &self.name,
                format!("error storing data into {}", self.name),
            ));
        }
        self.records.push(record.clone());
        Ok(())
    }
}
