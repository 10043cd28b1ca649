//! The two demonstration systems run by the `bulkcopy` binary.
//!
//! `Xenia` and `Alice` are synthetic sources that roll a die on each pull;
//! `Pillar` and `Bob` are sinks that echo what they store. The pairs are
//! unrelated types that only meet through the `Source` and `Sink` traits.

use std::io::Write;

use bulkcopy_utils::{PullError, Record, StoreError};
use rand::Rng;
use serde::Deserialize;

use crate::builder::{BuildError, PipelineBuilder};
use crate::pipeline::Pipeline;
use crate::sinks::console::ConsoleSink;
use crate::sinks::Sink;
use crate::sources::random::RandomSource;
use crate::sources::Source;

/// A system we need to pull data from.
pub struct Xenia<R, W>(RandomSource<R, W>);

impl<R: Rng, W: Write> Xenia<R, W> {
    pub fn new(rng: R, out: W) -> Self {
        Xenia(RandomSource::new("Xenia", rng, out))
    }
}

impl<R: Rng, W: Write> Source for Xenia<R, W> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        self.0.pull(slot)
    }
}

/// A system we need to store data into.
pub struct Pillar<W>(ConsoleSink<W>);

impl<W: Write> Pillar<W> {
    pub fn new(out: W) -> Self {
        Pillar(ConsoleSink::new("Pillar", out))
    }
}

impl<W: Write> Sink for Pillar<W> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        self.0.store(record)
    }
}

pub struct Alice<R, W>(RandomSource<R, W>);

impl<R: Rng, W: Write> Alice<R, W> {
    pub fn new(rng: R, out: W) -> Self {
        Alice(RandomSource::new("Alice", rng, out))
    }
}

impl<R: Rng, W: Write> Source for Alice<R, W> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        self.0.pull(slot)
    }
}

pub struct Bob<W>(ConsoleSink<W>);

impl<W: Write> Bob<W> {
    pub fn new(out: W) -> Self {
        Bob(ConsoleSink::new("Bob", out))
    }
}

impl<W: Write> Sink for Bob<W> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        self.0.store(record)
    }
}

/// Which source/sink pair a demo pipeline is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoSystem {
    XeniaPillar,
    AliceBob,
}

impl DemoSystem {
    /// Build a named pipeline for this system. `out` is called once for the
    /// source's `In:` lines and once for the sink's `Out:` lines.
    pub fn pipeline<'a, R, W>(
        self,
        name: &str,
        rng: R,
        batch_size: usize,
        mut out: impl FnMut() -> W,
    ) -> Result<Pipeline<'a>, BuildError>
    where
        R: Rng + 'a,
        W: Write + 'a,
    {
        let builder = PipelineBuilder::new(name).batch_size(batch_size);
        let builder = match self {
            DemoSystem::XeniaPillar => builder.source(Xenia::new(rng, out())).sink(Pillar::new(out())),
            DemoSystem::AliceBob => builder.source(Alice::new(rng, out())).sink(Bob::new(out())),
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copier::{TerminalState, Termination};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_both(seed: u64) -> (Vec<Termination>, String) {
        let buf = SharedBuf::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut results = Vec::new();
        for system in [DemoSystem::XeniaPillar, DemoSystem::AliceBob] {
            let mut pipeline = system
                .pipeline("demo", &mut rng, 3, || buf.clone())
                .unwrap();
            results.push(pipeline.run());
        }
        (results, buf.text())
    }

    #[test]
    fn stdout_lines_match_counters() {
        for seed in 0..20 {
            let (results, text) = run_both(seed);
            let pulled: usize = results.iter().map(|t| t.stats.pulled).sum();
            let stored: usize = results.iter().map(|t| t.stats.stored).sum();

            assert_eq!(pulled, stored, "demo sinks never fail");
            assert_eq!(text.lines().filter(|l| *l == "In: Data").count(), pulled);
            assert_eq!(text.lines().filter(|l| *l == "Out: Data").count(), stored);
            assert!(results.iter().all(|t| t.state != TerminalState::StoppedOnStoreError));
        }
    }

    #[test]
    fn each_batch_is_pulled_before_it_is_stored() {
        let (_, text) = run_both(11);
        let mut pending = 0usize;
        for line in text.lines() {
            match line {
                "In: Data" => {
                    pending += 1;
                    assert!(pending <= 3);
                }
                "Out: Data" => {
                    assert!(pending > 0);
                    pending -= 1;
                }
                other => panic!("unexpected line {other:?}"),
            }
        }
        assert_eq!(pending, 0);
    }

    #[test]
    fn seeded_runs_are_repeatable() {
        assert_eq!(run_both(99), run_both(99));
    }

    #[test]
    fn systems_have_distinct_names() {
        let mut rng = StdRng::seed_from_u64(1);
        let xenia = Xenia::new(&mut rng, io::sink());
        assert_eq!(xenia.name(), "Xenia");
        let alice = Alice::new(&mut rng, io::sink());
        assert_eq!(alice.name(), "Alice");
        assert_eq!(Pillar::new(io::sink()).name(), "Pillar");
        assert_eq!(Bob::new(io::sink()).name(), "Bob");
    }

    #[test]
    fn zero_batch_size_fails_to_build() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = DemoSystem::AliceBob.pipeline("demo", &mut rng, 0, io::sink);
        assert!(matches!(result, Err(BuildError::ZeroBatchSize)));
    }
}
