use bulkcopy_utils::{PullError, Record};

/// Anything that can hand out records one at a time.
///
/// A successful `pull` writes exactly one record into `slot`. A failed pull
/// leaves `slot` unspecified; callers must not read it. `PullError::Exhausted`
/// is the normal end of data and is terminal: a source that returned it is
/// not pulled again by the copier.
pub trait Source {
    /// Human-readable name for logging and metrics
    fn name(&self) -> &str;

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        (**self).pull(slot)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        (**self).pull(slot)
    }
}
