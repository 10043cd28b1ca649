use bulkcopy_utils::{Record, StoreError};

/// Anything that can take records one at a time.
///
/// A failed `store` exposes no partial state; records stored before it stay
/// stored.
pub trait Sink {
    fn name(&self) -> &str;

    fn store(&mut self, record: &Record) -> Result<(), StoreError>;
}

impl<K: Sink + ?Sized> Sink for &mut K {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        (**self).store(record)
    }
}

impl<K: Sink + ?Sized> Sink for Box<K> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        (**self).store(record)
    }
}
