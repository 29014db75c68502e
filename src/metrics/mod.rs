//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_int_counter_with_registry, CounterVec,
    IntCounter, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    /// Questions handled, labelled by outcome (answered, escalated)
    pub questions_total: CounterVec,

    /// Resolution attempts, labelled by outcome (resolved, rejected)
    pub resolutions_total: CounterVec,

    /// Facts learned from supervisor answers
    pub facts_learned: IntCounter,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let questions_total = register_counter_vec_with_registry!(
            Opts::new("frontdesk_questions_total", "Total questions handled"),
            &["outcome"],
            registry
        )?;

        let resolutions_total = register_counter_vec_with_registry!(
            Opts::new("frontdesk_resolutions_total", "Total resolution attempts"),
            &["outcome"],
            registry
        )?;

        let facts_learned = register_int_counter_with_registry!(
            Opts::new("frontdesk_facts_learned_total", "Facts learned from resolutions"),
            registry
        )?;

        Ok(Self {
            registry,
            questions_total,
            resolutions_total,
            facts_learned,
        })
    }

    /// Render all metrics in prometheus text exposition format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        encoder
            .encode_to_string(&self.registry.gather())
            .unwrap_or_default()
    }
}
