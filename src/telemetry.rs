use std::time::Duration;

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{exponential_buckets, Histogram};
use prometheus_client::registry::{Registry, Unit};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct OutcomeLabels {
    pub outcome: String,
}

/// Process-level metrics served on `/metrics`. Never mixed into probe output.
#[derive(Debug)]
pub struct Telemetry {
    registry: Registry,
    probes: Family<OutcomeLabels, Counter>,
    probe_duration: Histogram,
}

impl Telemetry {
    pub fn new() -> Self {
        let mut registry = Registry::with_prefix("valorant_exporter");

        let probes = Family::<OutcomeLabels, Counter>::default();
        registry.register("probes", "Probe requests by outcome", probes.clone());

        let probe_duration = Histogram::new(exponential_buckets(0.05, 2.0, 10));
        registry.register_with_unit(
            "probe_duration",
            "Time spent answering a probe",
            Unit::Seconds,
            probe_duration.clone(),
        );

        Self {
            registry,
            probes,
            probe_duration,
        }
    }

    pub fn record_probe(&self, outcome: &str, elapsed: Duration) {
        self.probes
            .get_or_create(&OutcomeLabels {
                outcome: outcome.to_string(),
            })
            .inc();
        self.probe_duration.observe(elapsed.as_secs_f64());
    }

    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
