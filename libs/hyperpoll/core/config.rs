use crate::traits::*;
use std::time::Duration;

/// How the poller treats a tick that fires while an earlier fetch is
/// still outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Always issue the fetch; a result is applied only if no newer
    /// generation has been applied already
    #[default]
    LatestGeneration,
    /// Skip the tick entirely while a fetch is in flight
    SkipWhileInFlight,
}

/// Configuration for a Poller
///
/// Built through the type-state builder or directly via `new`.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between ticks; also the only retry policy
    pub(crate) interval: Duration,

    /// Upper bound on a single fetch. `None` means "one interval"
    pub(crate) fetch_timeout: Option<Duration>,

    /// Overlapping fetch policy
    pub(crate) overlap: OverlapPolicy,

    /// Name used in log lines
    pub(crate) name: String,
}

impl PollerConfig {
    /// Create a configuration with the given interval and defaults elsewhere
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            fetch_timeout: None,
            overlap: OverlapPolicy::default(),
            name: "poller".to_string(),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Get the effective fetch timeout
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout.unwrap_or(self.interval)
    }

    /// Get the overlap policy
    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Get the poller name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reject configurations the ticker cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(HyperPollError::Configuration(
                "interval must be greater than zero".to_string(),
            ));
        }
        if let Some(timeout) = self.fetch_timeout {
            if timeout.is_zero() {
                return Err(HyperPollError::Configuration(
                    "fetch timeout must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}
