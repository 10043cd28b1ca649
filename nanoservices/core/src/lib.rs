//! bulkcopy_core — batch pull/store pipelines over small capability traits
//!
//! A [`sources::Source`] hands out one record per call and a
//! [`sinks::Sink`] takes one record per call. [`copier::BatchCopier`] moves
//! records between any such pair a fixed-size batch at a time, and
//! [`pipeline::Pipeline`] gives a pair a name, a buffer and metrics.
//!
//! Basic usage:
//!
//! ```
//! use bulkcopy_core::builder::PipelineBuilder;
//! use bulkcopy_core::sinks::memory::MemorySink;
//! use bulkcopy_core::sources::iter::IterSource;
//!
//! let mut sink = MemorySink::new("memory");
//! let mut pipeline = PipelineBuilder::new("example")
//!     .batch_size(2)
//!     .source(IterSource::new("lines", ["a", "b", "c"]))
//!     .sink(&mut sink)
//!     .build()
//!     .unwrap();
//! let done = pipeline.run();
//! assert!(done.is_clean());
//! drop(pipeline);
//! assert_eq!(sink.records().len(), 3);
//! ```

pub mod builder;
pub mod config;
pub mod copier;
pub mod demo;
pub mod pipeline;
pub mod sinks;
pub mod sources;

pub mod logging;

pub mod metrics;
