use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::copier::Termination;

// Global registry and counters are initialized lazily.
static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::new_custom(Some("bulkcopy".to_string()), None).expect("valid registry prefix")
});

static RECORDS_PULLED: Lazy<IntCounterVec> = Lazy::new(|| {
    let opts = Opts::new("records_pulled_total", "Records pulled from sources");
    let c = IntCounterVec::new(opts, &["pipeline"]).expect("valid counter definition");
    REGISTRY.register(Box::new(c.clone())).ok();
    c
});

static RECORDS_STORED: Lazy<IntCounterVec> = Lazy::new(|| {
    let opts = Opts::new("records_stored_total", "Records stored into sinks");
    let c = IntCounterVec::new(opts, &["pipeline"]).expect("valid counter definition");
    REGISTRY.register(Box::new(c.clone())).ok();
    c
});

static TERMINATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let opts = Opts::new("pipeline_terminations_total", "Finished copies by terminal state");
    let c = IntCounterVec::new(opts, &["pipeline", "state"]).expect("valid counter definition");
    REGISTRY.register(Box::new(c.clone())).ok();
    c
});

/// Record the outcome of one copy for `pipeline`.
pub fn record(pipeline: &str, done: &Termination) {
    RECORDS_PULLED
        .with_label_values(&[pipeline])
        .inc_by(done.stats.pulled as u64);
    RECORDS_STORED
        .with_label_values(&[pipeline])
        .inc_by(done.stats.stored as u64);
    TERMINATIONS
        .with_label_values(&[pipeline, done.state.as_str()])
        .inc();
}

/// Counter value for records stored by `pipeline` so far.
pub fn stored_total(pipeline: &str) -> u64 {
    RECORDS_STORED.with_label_values(&[pipeline]).get()
}

/// Gather metrics as text in Prometheus exposition format.
///
/// ```no_run
/// use bulkcopy_core::metrics;
/// let body = metrics::gather_text();
/// println!("metrics:\n{}", body);
/// ```
pub fn gather_text() -> String {
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    if let Err(e) = TextEncoder::new().encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
