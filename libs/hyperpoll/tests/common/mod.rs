//! Common test utilities for HyperPoll integration tests
//!
//! Provides a scripted fetcher and a recording state handler.

#![allow(dead_code)]

use async_trait::async_trait;
use hyperpoll::{Fetcher, HyperPollError, Result, StateHandler};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

/// Fetcher whose n-th call (1-based) can be delayed or made to fail.
/// Successful calls return their call number.
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    calls: Arc<AtomicUsize>,
    delays: HashMap<usize, Duration>,
    default_delay: Duration,
    failures: HashMap<usize, u16>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay_call(mut self, call: usize, delay: Duration) -> Self {
        self.delays.insert(call, delay);
        self
    }

    pub fn delay_all(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn fail_call(mut self, call: usize, status: u16) -> Self {
        self.failures.insert(call, status);
        self
    }

    /// Shared counter, readable after the fetcher moved into a poller
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    type Output = usize;

    async fn fetch(&self) -> Result<usize> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let delay = self.delays.get(&call).copied().unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match self.failures.get(&call) {
            Some(status) => Err(HyperPollError::Status {
                status: *status,
                body: format!("scripted failure on call {}", call),
            }),
            None => Ok(call),
        }
    }
}

/// Outcome as seen by the state handler
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(usize),
    Failure(String),
}

/// State handler that records every outcome in order
#[derive(Debug, Default)]
pub struct RecordingState {
    pub outcomes: Vec<Outcome>,
}

impl RecordingState {
    pub fn successes(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Success(n) => Some(*n),
                Outcome::Failure(_) => None,
            })
            .collect()
    }
}

impl StateHandler<usize> for RecordingState {
    fn on_success(&mut self, output: usize) {
        self.outcomes.push(Outcome::Success(output));
    }

    fn on_failure(&mut self, error: &HyperPollError) {
        self.outcomes.push(Outcome::Failure(error.to_string()));
    }
}
