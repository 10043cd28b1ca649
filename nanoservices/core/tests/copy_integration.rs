use bulkcopy_core::builder::PipelineBuilder;
use bulkcopy_core::copier::{copy, pull_batch, store_batch, CopyStats, TerminalState};
use bulkcopy_core::sinks::memory::MemorySink;
use bulkcopy_core::sinks::Sink;
use bulkcopy_core::sources::scripted::ScriptedSource;
use bulkcopy_core::sources::Source;
use bulkcopy_utils::error::Error;
use bulkcopy_utils::{PullError, Record, StoreError};

/// Source that fails with a read error once it has produced `limit` records.
struct FlakySource {
    produced: usize,
    limit: usize,
}

impl Source for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    fn pull(&mut self, slot: &mut Record) -> Result<(), PullError> {
        if self.produced == self.limit {
            return Err(PullError::transient("flaky", "connection reset"));
        }
        self.produced += 1;
        slot.line = format!("row-{}", self.produced);
        Ok(())
    }
}

/// Sink that keeps the lines it was handed.
#[derive(Default)]
struct LedgerSink {
    lines: Vec<String>,
}

impl Sink for LedgerSink {
    fn name(&self) -> &str {
        "ledger"
    }

    fn store(&mut self, record: &Record) -> Result<(), StoreError> {
        self.lines.push(record.line.clone());
        Ok(())
    }
}

#[test]
fn scripted_exhaustion_scenario() {
    let mut src = ScriptedSource::new("src", [Ok(Record::new("a")), Ok(Record::new("b"))]);
    let mut buffer = vec![Record::default(); 3];
    let (n, outcome) = pull_batch(&mut src, &mut buffer);
    assert_eq!((n, outcome), (2, Err(PullError::Exhausted)));

    let mut sink = MemorySink::new("sink");
    let (m, outcome) = store_batch(&mut sink, &buffer[..n]);
    assert_eq!(m, 2);
    assert!(outcome.is_ok());

    let mut src = ScriptedSource::new("src", [Ok(Record::new("a")), Ok(Record::new("b"))]);
    let mut sink = MemorySink::new("sink");
    let done = copy(&mut src, &mut sink, 3).unwrap();
    assert_eq!(done.error, Error::Exhausted);
    assert_eq!(sink.records().len(), 2);
}

#[test]
fn scripted_store_failure_scenario() {
    let records = vec![Record::new("Data"); 3];
    let mut sink = MemorySink::new("sink").failing_on(2);
    let (m, outcome) = store_batch(&mut sink, &records);
    assert_eq!(m, 1);
    assert!(outcome.is_err());

    let mut src = ScriptedSource::endless("src", "Data");
    let mut sink = MemorySink::new("sink").failing_on(2);
    let done = copy(&mut src, &mut sink, 3).unwrap();
    assert_eq!(done.state, TerminalState::StoppedOnStoreError);
    assert!(matches!(done.error, Error::WriteFailure { .. }));
    assert_eq!(done.stats, CopyStats { batches: 1, pulled: 3, stored: 1 });
}

#[test]
fn pull_failure_reported_after_prefix_is_stored() {
    let mut src = FlakySource { produced: 0, limit: 5 };
    let mut sink = LedgerSink::default();

    let done = copy(&mut src, &mut sink, 3).unwrap();
    assert_eq!(done.state, TerminalState::StoppedOnPullError);
    assert_eq!(done.error.to_string(), "Pull Error (flaky): connection reset");
    assert_eq!(sink.lines, ["row-1", "row-2", "row-3", "row-4", "row-5"]);
    assert_eq!(done.into_result().unwrap_err(), Error::TransientFailure {
        origin: "flaky".into(),
        cause: "connection reset".into(),
    });
}

#[test]
fn copies_through_trait_objects() {
    let mut src: Box<dyn Source> = Box::new(FlakySource { produced: 0, limit: 4 });
    let mut sink: Box<dyn Sink> = Box::new(MemorySink::new("mem").failing_on(4));

    let done = copy(src.as_mut(), sink.as_mut(), 2).unwrap();
    assert_eq!(done.state, TerminalState::StoppedOnStoreError);
    assert_eq!(done.stats.stored, 3);
}

#[test]
fn two_unrelated_pairs_share_one_pipeline_type() {
    let mut ledger = LedgerSink::default();
    let mut memory = MemorySink::new("mem");

    let outcomes: Vec<TerminalState> = {
        let mut first = PipelineBuilder::new("flaky-ledger")
            .source(FlakySource { produced: 0, limit: 2 })
            .sink(&mut ledger)
            .build()
            .unwrap();
        let mut second = PipelineBuilder::new("scripted-memory")
            .batch_size(4)
            .source(ScriptedSource::new("src", vec![Ok(Record::new("x")); 6]))
            .sink(&mut memory)
            .build()
            .unwrap();
        vec![first.run().state, second.run().state]
    };

    assert_eq!(outcomes, [TerminalState::StoppedOnPullError, TerminalState::StoppedClean]);
    assert_eq!(ledger.lines.len(), 2);
    assert_eq!(memory.records().len(), 6);
}

#[test]
fn equivalent_runs_are_identical() {
    let run = || {
        let mut src = FlakySource { produced: 0, limit: 7 };
        let mut sink = MemorySink::new("mem").failing_on(9);
        let done = copy(&mut src, &mut sink, 3).unwrap();
        (done, sink.into_records())
    };
    assert_eq!(run(), run());
}
