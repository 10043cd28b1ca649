use std::io::Write;

use bulkcopy_utils::{PullError, Record};
use rand::Rng;

use super::traits::Source;

/// What a single roll of the ten-sided die means for a pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roll {
    Data,
    Exhausted,
    Failure,
}

impl Roll {
    /// Faces 1 and 9 end the data, face 5 is a read error, the rest carry data.
    pub fn from_face(face: u32) -> Self {
        match face {
            1 | 9 => Roll::Exhausted,
            5 => Roll::Failure,
            _ => Roll::Data,
        }
    }
}

/// Synthetic source that rolls a die on every pull and echoes each record it
/// hands out as an `In:` line.
pub struct RandomSource<R, W> {
    name: String,
    payload: String,
    rng: R,
    out: W,
}

impl<R: Rng, W: Write> RandomSource<R, W> {
    pub fn new(name: impl Into<String>, rng: R, out: W) -> Self {
        Self {
            name: name.into(),
            payload: "Data".to_string(),
            rng,
            out,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: Rng, W: Write> Source for RandomSource<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        match Roll::from_face(self.rng.random_range(0..10)) {
            Roll::Exhausted => Err(PullError::Exhausted),
            Roll::Failure => Err(PullError::transient(
                &self.name,
                format!("error reading data from {}", self.name),
            )),
            Roll::Data => {
                slot.line.clone_from(&self.payload);
                writeln!(self.out, "In: {}", slot.line)
                    .map_err(|e| PullError::transient(&self.name, e.to_string()))
            }
        }
    }
}
