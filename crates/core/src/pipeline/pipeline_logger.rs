use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for filter run events.
///
/// Decouples the orchestrator and use case from where their events end up
/// (the `log` crate, a test, nothing at all).
pub trait PipelineLogger: Send {
    /// Report how many workers have joined so far.
    fn progress(&mut self, joined: usize, total: usize);

    /// Record how long a named phase took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. hole count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _joined: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that collects phase timings and metrics and
/// forwards messages to the `log` crate.
pub struct StdoutPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, f64>,
    start_time: Instant,
    workers: usize,
}

impl StdoutPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
            workers: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was timed.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Filter summary ({} workers, {:.1}ms total):",
            self.workers, elapsed_ms
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let total_ms: f64 = self.timings[stage].iter().sum();
            lines.push(format!("  {stage:12}: {total_ms:8.2}ms"));
        }

        let mut names: Vec<_> = self.metrics.keys().collect();
        names.sort();
        for name in names {
            lines.push(format!("  {name}: {}", self.metrics[name]));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metric_value(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, joined: usize, total: usize) {
        self.workers = total;
        log::debug!("Joined worker {joined}/{total}");
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 4);
        logger.timing("workers", 5.0);
        logger.metric("holes", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = StdoutPipelineLogger::new();
        logger.timing("workers", 20.0);
        logger.timing("workers", 30.0);
        logger.timing("holes", 5.0);

        let workers = logger.timings_for("workers").unwrap();
        assert_eq!(workers.len(), 2);
        assert_relative_eq!(workers[0], 20.0);
        assert_relative_eq!(workers[1], 30.0);
        assert_eq!(logger.timings_for("holes").unwrap().len(), 1);
        assert!(logger.timings_for("missing").is_none());
    }

    #[test]
    fn test_metric_keeps_latest_value() {
        let mut logger = StdoutPipelineLogger::new();
        logger.metric("holes", 3.0);
        logger.metric("holes", 9.0);
        assert_relative_eq!(logger.metric_value("holes").unwrap(), 9.0);
    }

    #[test]
    fn test_summary_lists_stages_and_metrics() {
        let mut logger = StdoutPipelineLogger::new();
        logger.progress(4, 4);
        logger.timing("workers", 12.0);
        logger.metric("holes", 9.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Filter summary (4 workers"));
        assert!(summary.contains("workers"));
        assert!(summary.contains("holes: 9"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(StdoutPipelineLogger::new().summary_string().is_none());
    }

    #[test]
    fn test_info_is_forwarded_not_summarized() {
        let mut logger = StdoutPipelineLogger::default();
        logger.info("hello world");
        assert!(logger.summary_string().is_none());
    }
}
