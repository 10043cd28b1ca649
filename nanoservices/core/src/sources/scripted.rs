use std::collections::VecDeque;

use bulkcopy_utils::{PullError, Record};

use super::traits::Source;

/// Replays a fixed script of pull outcomes, then repeats a tail outcome
/// forever (`Exhausted` unless told otherwise).
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    script: VecDeque<Result<Record, PullError>>,
    tail: Result<Record, PullError>,
    calls: usize,
}

impl ScriptedSource {
    pub fn new<I>(name: impl Into<String>, script: I) -> Self
    where
        I: IntoIterator<Item = Result<Record, PullError>>,
    {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
            tail: Err(PullError::Exhausted),
            calls: 0,
        }
    }

    /// A source that never runs dry.
    pub fn endless(name: impl Into<String>, record: impl Into<Record>) -> Self {
        Self::new(name, std::iter::empty()).then(Ok(record.into()))
    }

    /// Outcome returned once the script is used up.
    pub fn then(mut self, tail: Result<Record, PullError>) -> Self {
        self.tail = tail;
        self
    }

    /// Number of `pull` calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Source for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        self.calls += 1;
        let step = match self.script.pop_front() {
            Some(step) => step,
            None => self.tail.clone(),
        };
        *slot = step?;
        Ok(())
    }
}
