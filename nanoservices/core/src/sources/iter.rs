use bulkcopy_utils::{PullError, Record};

use super::traits::Source;

/// Adapts any iterator of lines into a source that is exhausted when the
/// iterator ends.
pub struct IterSource<I> {
    name: String,
    lines: I,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    pub fn new(name: impl Into<String>, lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            name: name.into(),
            lines: lines.into_iter(),
        }
    }
}

impl<I> Source for IterSource<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        let line = self.lines.next().ok_or(PullError::Exhausted)?;
        slot.line = line.into();
        Ok(())
    }
}
