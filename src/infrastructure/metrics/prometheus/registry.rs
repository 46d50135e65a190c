//! Name-addressed metrics registry.
//!
//! Wraps a private `prometheus::Registry` so several registries can live in
//! one process (one per router in tests). Metric families are registered
//! once at startup; afterwards the lookup tables are only read, and every
//! series update goes through prometheus' atomic counters, so runtime
//! operations take `&self` and never lock.

use anyhow::{anyhow, Result};
use prometheus::{Gauge, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;

/// Process-local collection of named counters, histograms and gauges.
pub struct MetricsRegistry {
    registry: Registry,
    counters: HashMap<String, IntCounterVec>,
    histograms: HashMap<String, HistogramVec>,
    gauges: HashMap<String, Gauge>,
}

impl MetricsRegistry {
    // ---

    pub fn new() -> Self {
        // ---
        MetricsRegistry {
            registry: Registry::new(),
            counters: HashMap::new(),
            histograms: HashMap::new(),
            gauges: HashMap::new(),
        }
    }

    /// Register a labeled, monotonically increasing counter family.
    ///
    /// # Errors
    /// Fails if a metric with the same name is already registered.
    pub fn register_counter(&mut self, name: &str, help: &str, labels: &[&str]) -> Result<()> {
        // ---
        let counter = IntCounterVec::new(Opts::new(name, help), labels)?;
        self.registry.register(Box::new(counter.clone()))?;
        self.counters.insert(name.to_string(), counter);
        Ok(())
    }

    /// Register a labeled histogram family using the default buckets.
    ///
    /// # Errors
    /// Fails if a metric with the same name is already registered.
    pub fn register_histogram(&mut self, name: &str, help: &str, labels: &[&str]) -> Result<()> {
        // ---
        let histogram = HistogramVec::new(HistogramOpts::new(name, help), labels)?;
        self.registry.register(Box::new(histogram.clone()))?;
        self.histograms.insert(name.to_string(), histogram);
        Ok(())
    }

    /// Register an unlabeled gauge.
    ///
    /// # Errors
    /// Fails if a metric with the same name is already registered.
    pub fn register_gauge(&mut self, name: &str, help: &str) -> Result<()> {
        // ---
        let gauge = Gauge::new(name, help)?;
        self.registry.register(Box::new(gauge.clone()))?;
        self.gauges.insert(name.to_string(), gauge);
        Ok(())
    }

    /// Add 1 to the series identified by `labels`, creating it at 0 on first use.
    pub fn increment_counter(&self, name: &str, labels: &[&str]) -> Result<()> {
        // ---
        let family = self
            .counters
            .get(name)
            .ok_or_else(|| anyhow!("Unknown counter: {name}"))?;
        family.get_metric_with_label_values(labels)?.inc();
        Ok(())
    }

    /// Record one sample (in seconds) into the series identified by `labels`.
    pub fn observe_histogram(&self, name: &str, labels: &[&str], value: f64) -> Result<()> {
        // ---
        let family = self
            .histograms
            .get(name)
            .ok_or_else(|| anyhow!("Unknown histogram: {name}"))?;
        family.get_metric_with_label_values(labels)?.observe(value);
        Ok(())
    }

    /// Overwrite the gauge's current value.
    pub fn set_gauge(&self, name: &str, value: f64) -> Result<()> {
        // ---
        let gauge = self
            .gauges
            .get(name)
            .ok_or_else(|| anyhow!("Unknown gauge: {name}"))?;
        gauge.set(value);
        Ok(())
    }

    /// Point-in-time text exposition of every registered family.
    pub fn snapshot(&self) -> Result<String> {
        // ---
        let families = self.registry.gather();
        Ok(TextEncoder::new().encode_to_string(&families)?)
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
