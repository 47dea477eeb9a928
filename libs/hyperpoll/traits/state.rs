use crate::error::HyperPollError;

/// Trait for applying fetch outcomes to application state
///
/// The poller owns the handler behind a mutex and is the only caller of
/// these methods. Calls happen after the session liveness check, so a
/// handler never sees a result that arrived after `stop()`.
pub trait StateHandler<T>: Send + 'static {
    /// Apply a successful fetch
    fn on_success(&mut self, output: T);

    /// Apply a failed fetch
    ///
    /// # Arguments
    /// * `error` - The failure, including timeouts
    fn on_failure(&mut self, error: &HyperPollError);
}

/// A state handler that only remembers how many outcomes it saw
#[derive(Debug, Default)]
pub struct CountingState {
    pub successes: u64,
    pub failures: u64,
}

impl<T> StateHandler<T> for CountingState {
    fn on_success(&mut self, _output: T) {
        self.successes += 1;
    }

    fn on_failure(&mut self, _error: &HyperPollError) {
        self.failures += 1;
    }
}
