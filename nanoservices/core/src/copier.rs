//! Batch pull/store loop.
//!
//! A [`BatchCopier`] owns a fixed-size buffer of records and moves data from a
//! [`Source`] into a [`Sink`] one batch at a time:
//!
//! 1. fill the buffer slot by slot with [`pull_batch`];
//! 2. forward the filled prefix with [`store_batch`];
//! 3. stop on the first store failure, otherwise stop on the pull failure, if
//!    any, otherwise go again.
//!
//! A store failure always wins over a pull failure seen in the same cycle.
//! There are no retries: every failure ends the copy.

use bulkcopy_utils::error::Error;
use bulkcopy_utils::{BulkCopyResult, PullError, Record, StoreError};

use crate::sinks::Sink;
use crate::sources::Source;

/// Pull one record per slot of `buffer`, stopping at the first failure.
///
/// Returns how many leading slots were filled and the failure that stopped
/// the batch, if any. Slots at and after the returned count are unspecified.
pub fn pull_batch<S>(source: &mut S, buffer: &mut [Record]) -> (usize, Result<(), PullError>)
where
    S: Source + ?Sized,
{
    for (i, slot) in buffer.iter_mut().enumerate() {
        if let Err(e) = source.pull(slot) {
            return (i, Err(e));
        }
    }
    (buffer.len(), Ok(()))
}

/// Store `records` in order, stopping at the first failure.
///
/// Returns how many records were stored. Nothing already stored is undone.
pub fn store_batch<K>(sink: &mut K, records: &[Record]) -> (usize, Result<(), StoreError>)
where
    K: Sink + ?Sized,
{
    for (i, record) in records.iter().enumerate() {
        if let Err(e) = sink.store(record) {
            return (i, Err(e));
        }
    }
    (records.len(), Ok(()))
}

/// Counters for one `copy` invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Pull/store cycles started, including the last one.
    pub batches: usize,
    pub pulled: usize,
    pub stored: usize,
}

/// How a copy ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// The source was exhausted and everything pulled was stored.
    StoppedClean,
    /// The source failed; the records pulled before it were stored.
    StoppedOnPullError,
    /// The sink failed part way through a batch.
    StoppedOnStoreError,
}

impl TerminalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalState::StoppedClean => "stopped_clean",
            TerminalState::StoppedOnPullError => "stopped_on_pull_error",
            TerminalState::StoppedOnStoreError => "stopped_on_store_error",
        }
    }
}

/// Result of running a copy to its end. A copy always ends with an error;
/// `Error::Exhausted` is the clean one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Termination {
    pub state: TerminalState,
    pub stats: CopyStats,
    pub error: Error,
}

impl Termination {
    fn pull(stats: CopyStats, err: PullError) -> Self {
        let state = if err.is_exhausted() {
            TerminalState::StoppedClean
        } else {
            TerminalState::StoppedOnPullError
        };
        Self { state, stats, error: err.into() }
    }

    fn store(stats: CopyStats, err: StoreError) -> Self {
        Self {
            state: TerminalState::StoppedOnStoreError,
            stats,
            error: err.into(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.state == TerminalState::StoppedClean
    }

    /// `Ok` with the counters when the source simply ran out of data.
    pub fn into_result(self) -> BulkCopyResult<CopyStats> {
        if self.is_clean() {
            Ok(self.stats)
        } else {
            Err(self.error)
        }
    }
}

/// Drives pull-then-store cycles over a reusable buffer.
#[derive(Debug, Clone)]
pub struct BatchCopier {
    buffer: Vec<Record>,
}

impl BatchCopier {
    pub fn new(batch_size: usize) -> BulkCopyResult<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidBatchSize);
        }
        Ok(Self {
            buffer: vec![Record::default(); batch_size],
        })
    }

    pub fn batch_size(&self) -> usize {
        self.buffer.len()
    }

    /// Copy until the source is exhausted or either side fails.
    pub fn copy<S, K>(&mut self, source: &mut S, sink: &mut K) -> Termination
    where
        S: Source + ?Sized,
        K: Sink + ?Sized,
    {
        let mut stats = CopyStats::default();

        loop {
            stats.batches += 1;
            let (n, pulled) = pull_batch(source, &mut self.buffer);
            stats.pulled += n;

            if n > 0 {
                let (m, stored) = store_batch(sink, &self.buffer[..n]);
                stats.stored += m;
                if let Err(e) = stored {
                    if let Err(dropped) = &pulled {
                        tracing::debug!(
                            source = source.name(),
                            error = %dropped,
                            "pull outcome discarded after store failure"
                        );
                    }
                    return Termination::store(stats, e);
                }
            }

            if let Err(e) = pulled {
                return Termination::pull(stats, e);
            }

            tracing::trace!(batch = stats.batches, records = n, "batch copied");
        }
    }
}

/// One-shot copy with a freshly allocated buffer of `batch_size` records.
pub fn copy<S, K>(source: &mut S, sink: &mut K, batch_size: usize) -> BulkCopyResult<Termination>
where
    S: Source + ?Sized,
    K: Sink + ?Sized,
{
    Ok(BatchCopier::new(batch_size)?.copy(source, sink))
}
