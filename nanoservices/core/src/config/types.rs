use serde::Deserialize;

use crate::builder::DEFAULT_BATCH_SIZE;
use crate::demo::DemoSystem;

/// Settings for the demo binary. Every field is optional in YAML; the
/// defaults run both demo systems with a batch size of 3.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub batch_size: usize,
    /// Seed for the shared random generator. Taken from the clock when absent.
    pub seed: Option<u64>,
    pub pipelines: Vec<PipelineConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            pipelines: vec![
                PipelineConfig::new("xenia-pillar", DemoSystem::XeniaPillar),
                PipelineConfig::new("alice-bob", DemoSystem::AliceBob),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub name: String,
    pub system: DemoSystem,
}

impl PipelineConfig {
    pub fn new(name: impl Into<String>, system: DemoSystem) -> Self {
        Self {
            name: name.into(),
            system,
        }
    }
}
