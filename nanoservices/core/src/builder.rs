use bulkcopy_utils::error::Error;

use crate::pipeline::Pipeline;
use crate::sinks::Sink;
use crate::sources::Source;

pub const DEFAULT_BATCH_SIZE: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("pipeline name is required")]
    NoName,
    #[error("a source is required")]
    NoSource,
    #[error("a sink is required")]
    NoSink,
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::ZeroBatchSize => Error::InvalidBatchSize,
            other => Error::Build(other.to_string()),
        }
    }
}

pub struct PipelineBuilder<'a> {
    name: Option<String>,
    batch_size: usize,
    source: Option<Box<dyn Source + 'a>>,
    sink: Option<Box<dyn Sink + 'a>>,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: Some(name).filter(|n| !n.is_empty()),
            batch_size: DEFAULT_BATCH_SIZE,
            source: None,
            sink: None,
        }
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn source(mut self, source: impl Source + 'a) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn sink(mut self, sink: impl Sink + 'a) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<Pipeline<'a>, BuildError> {
        let name = self.name.ok_or(BuildError::NoName)?;
        let source = self.source.ok_or(BuildError::NoSource)?;
        let sink = self.sink.ok_or(BuildError::NoSink)?;

        let mut pipeline =
            Pipeline::new(source, sink, self.batch_size).map_err(|_| BuildError::ZeroBatchSize)?;
        pipeline.set_name(name);
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::memory::MemorySink;
    use crate::sources::scripted::ScriptedSource;

    #[test]
    fn builder_creates_pipeline() {
        let pipeline = PipelineBuilder::new("test")
            .source(ScriptedSource::endless("fetch", "x"))
            .sink(MemorySink::new("save"))
            .build()
            .unwrap();

        assert_eq!(pipeline.name(), "test");
        assert_eq!(pipeline.batch_size(), DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn builder_requires_source() {
        let result = PipelineBuilder::new("test")
            .sink(MemorySink::new("save"))
            .build();

        assert!(matches!(result, Err(BuildError::NoSource)));
    }

    #[test]
    fn builder_requires_sink() {
        let result = PipelineBuilder::new("test")
            .source(ScriptedSource::endless("fetch", "x"))
            .build();

        assert!(matches!(result, Err(BuildError::NoSink)));
    }

    #[test]
    fn builder_requires_name() {
        let result = PipelineBuilder::new("")
            .source(ScriptedSource::endless("fetch", "x"))
            .sink(MemorySink::new("save"))
            .build();

        assert!(matches!(result, Err(BuildError::NoName)));
    }

    #[test]
    fn builder_rejects_zero_batch_size() {
        let result = PipelineBuilder::new("test")
            .batch_size(0)
            .source(ScriptedSource::endless("fetch", "x"))
            .sink(MemorySink::new("save"))
            .build();

        let err = result.err().unwrap();
        assert!(matches!(err, BuildError::ZeroBatchSize));
        assert_eq!(Error::from(err), Error::InvalidBatchSize);
    }
}
