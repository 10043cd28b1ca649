pub use bulkcopy_core as core;
pub use bulkcopy_utils as utils;

// Convenience re-exports for common usage
pub use bulkcopy_core::builder::PipelineBuilder;
pub use bulkcopy_core::copier::{copy, pull_batch, store_batch, BatchCopier, TerminalState, Termination};
pub use bulkcopy_core::pipeline::Pipeline;
pub use bulkcopy_core::sinks::Sink;
pub use bulkcopy_core::sources::Source;
pub use bulkcopy_utils::{BulkCopyResult, PullError, Record, StoreError};
