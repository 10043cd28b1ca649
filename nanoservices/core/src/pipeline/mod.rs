use bulkcopy_utils::BulkCopyResult;

use crate::copier::{BatchCopier, TerminalState, Termination};
use crate::metrics;
use crate::sinks::Sink;
use crate::sources::Source;

/// A named source/sink pair with its own batch buffer.
pub struct Pipeline<'a> {
    name: String,
    source: Box<dyn Source + 'a>,
    sink: Box<dyn Sink + 'a>,
    copier: BatchCopier,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: Box<dyn Source + 'a>,
        sink: Box<dyn Sink + 'a>,
        batch_size: usize,
    ) -> BulkCopyResult<Self> {
        let name = format!("{}-{}", source.name(), sink.name());
        Ok(Self {
            name,
            source,
            sink,
            copier: BatchCopier::new(batch_size)?,
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn batch_size(&self) -> usize {
        self.copier.batch_size()
    }

    /// Copy from the source into the sink until one of them stops it.
    pub fn run(&mut self) -> Termination {
        tracing::debug!(
            pipeline = %self.name,
            source = self.source.name(),
            sink = self.sink.name(),
            batch_size = self.copier.batch_size(),
            "pipeline starting"
        );

        let done = self.copier.copy(self.source.as_mut(), self.sink.as_mut());
        metrics::record(&self.name, &done);

        match done.state {
            TerminalState::StoppedClean => tracing::info!(
                pipeline = %self.name,
                batches = done.stats.batches,
                pulled = done.stats.pulled,
                stored = done.stats.stored,
                "pipeline finished"
            ),
            state => tracing::warn!(
                pipeline = %self.name,
                state = state.as_str(),
                pulled = done.stats.pulled,
                stored = done.stats.stored,
                error = %done.error,
                "pipeline stopped"
            ),
        }
        done
    }
}
