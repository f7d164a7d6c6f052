//! Prometheus Metrics for the Reparto Server
//!
//! Metrics collection and text exposition for Prometheus scraping.

use prometheus::{
    CounterVec, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

/// Metrics Registry
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    pub deliveries_created_total: IntCounter,
    pub deliveries_deleted_total: IntCounter,
    pub delivery_lookups_total: CounterVec,
    pub http_request_duration_seconds: Histogram,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let deliveries_created_total = IntCounter::new(
            "reparto_deliveries_created_total",
            "Total number of deliveries created",
        )?;
        let deliveries_deleted_total = IntCounter::new(
            "reparto_deliveries_deleted_total",
            "Total number of deliveries deleted",
        )?;
        let delivery_lookups_total = CounterVec::new(
            Opts::new(
                "reparto_delivery_lookups_total",
                "Total number of delivery lookups",
            ),
            &["result"],
        )?;
        let http_request_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "reparto_http_request_duration_seconds",
                "Time taken to serve an HTTP request",
            )
            .buckets(vec![
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0,
            ]),
        )?;

        registry.register(Box::new(deliveries_created_total.clone()))?;
        registry.register(Box::new(deliveries_deleted_total.clone()))?;
        registry.register(Box::new(delivery_lookups_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            deliveries_created_total,
            deliveries_deleted_total,
            delivery_lookups_total,
            http_request_duration_seconds,
        })
    }

    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let metric_families = self.registry.gather();
        let encoder = TextEncoder::new();
        encoder.encode_to_string(&metric_families)
    }
}
