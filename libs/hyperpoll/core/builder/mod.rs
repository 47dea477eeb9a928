pub mod states;

use crate::config::{OverlapPolicy, PollerConfig};
use crate::poller::Poller;
use crate::traits::*;
use parking_lot::Mutex;
use states::*;
use std::sync::Arc;
use std::time::Duration;

/// Default tick interval when none is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Type-state builder for Poller
///
/// The fetcher and the state handler are required; `build()` only exists
/// once both have been provided.
pub struct PollerBuilder<Fs, Hs, F, S>
where
    Fs: FetcherState,
    Hs: HandlerState,
{
    _state: TypeState<Fs, Hs>,
    config: PollerConfig,
    fetcher: Option<F>,
    handler: Option<Arc<Mutex<S>>>,
}

impl PollerBuilder<NoFetcher, NoHandler, (), ()> {
    /// Create a new builder instance
    pub fn new() -> Self {
        Self {
            _state: TypeState::new(),
            config: PollerConfig::new(DEFAULT_INTERVAL),
            fetcher: None,
            handler: None,
        }
    }
}

impl Default for PollerBuilder<NoFetcher, NoHandler, (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

// Options available in every state
impl<Fs, Hs, F, S> PollerBuilder<Fs, Hs, F, S>
where
    Fs: FetcherState,
    Hs: HandlerState,
{
    /// Delay between ticks
    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    /// Upper bound on one fetch (defaults to the interval)
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = Some(timeout);
        self
    }

    /// Policy for ticks that fire while a fetch is outstanding
    pub fn overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.config.overlap = overlap;
        self
    }

    /// Name used in log lines
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: PollerConfig) -> Self {
        self.config = config;
        self
    }
}

// Fetcher setting
impl<Hs, S> PollerBuilder<NoFetcher, Hs, (), S>
where
    Hs: HandlerState,
{
    pub fn fetcher<F: Fetcher>(self, fetcher: F) -> PollerBuilder<HasFetcher, Hs, F, S> {
        PollerBuilder {
            _state: TypeState::new(),
            config: self.config,
            fetcher: Some(fetcher),
            handler: self.handler,
        }
    }
}

// Handler setting
impl<Fs, F> PollerBuilder<Fs, NoHandler, F, ()>
where
    Fs: FetcherState,
{
    /// Hand ownership of the state handler to the poller
    pub fn state<S>(self, state: S) -> PollerBuilder<Fs, HasHandler, F, S> {
        self.shared_state(Arc::new(Mutex::new(state)))
    }

    /// Use a state handler that is also shared with readers
    pub fn shared_state<S>(self, state: Arc<Mutex<S>>) -> PollerBuilder<Fs, HasHandler, F, S> {
        PollerBuilder {
            _state: TypeState::new(),
            config: self.config,
            fetcher: self.fetcher,
            handler: Some(state),
        }
    }
}

impl<F, S> PollerBuilder<HasFetcher, HasHandler, F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    /// Build the poller. It does not start until `start()` is called.
    pub fn build(self) -> Result<Poller<F, S>> {
        let fetcher = self
            .fetcher
            .ok_or_else(|| HyperPollError::Configuration("fetcher missing".to_string()))?;
        let handler = self
            .handler
            .ok_or_else(|| HyperPollError::Configuration("state handler missing".to_string()))?;

        Poller::new(self.config, fetcher, handler)
    }
}
