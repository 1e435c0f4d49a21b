// Metrics module
// Prometheus counters for classification outcomes

use anyhow::{Context, Result};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::responder::ChatResponse;

/// Classification counters, owned by one server instance
#[derive(Clone)]
pub struct ClassificationMetrics {
    registry: Registry,
    classifications: IntCounterVec,
    crisis_detections: IntCounter,
}

impl ClassificationMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let classifications = IntCounterVec::new(
            Opts::new(
                "solace_classifications_total",
                "Total chat messages classified, by bucket.",
            ),
            &["bucket"],
        )?;
        let crisis_detections = IntCounter::new(
            "solace_crisis_detections_total",
            "Total chat messages that matched a crisis phrase.",
        )?;

        registry.register(Box::new(classifications.clone()))?;
        registry.register(Box::new(crisis_detections.clone()))?;

        Ok(Self {
            registry,
            classifications,
            crisis_detections,
        })
    }

    /// Count one classified message
    pub fn record(&self, response: &ChatResponse) {
        self.classifications
            .with_label_values(&[response.bucket.as_str()])
            .inc();
        if response.is_crisis() {
            self.crisis_detections.inc();
        }
    }

    /// Number of messages recorded for `bucket`
    pub fn classified(&self, bucket: &str) -> u64 {
        self.classifications.with_label_values(&[bucket]).get()
    }

    /// Render all counters in the Prometheus text format
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .context("Failed to encode metrics")?;
        String::from_utf8(buffer).context("Metrics output was not UTF-8")
    }
}
