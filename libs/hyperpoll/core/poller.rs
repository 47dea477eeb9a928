use crate::config::{OverlapPolicy, PollerConfig};
use crate::session_state::{AtomicMetrics, AtomicSessionState, Metrics, SessionState};
use crate::ticker::spawn_ticker;
use crate::traits::*;
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Capacity of the event channel. Events are dropped when nobody drains it.
const EVENT_CAPACITY: usize = 1024;

/// Why a completed fetch was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The session it belonged to was stopped (or restarted) meanwhile
    SessionEnded,
    /// A newer generation had already been applied
    Superseded,
}

/// Lifecycle and fetch events emitted by the poller
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    /// A session started
    Started,
    /// A tick issued the fetch with this generation
    Tick(u64),
    /// A tick was skipped because a fetch was still in flight
    Skipped,
    /// A successful fetch was applied to the state handler
    Applied(u64),
    /// A failed fetch was applied to the state handler
    Failed(u64, String),
    /// A completed fetch was dropped
    Discarded(u64, DiscardReason),
    /// The session stopped
    Stopped,
}

/// Session bookkeeping guarded by one lock
///
/// Both `stop()` and the apply path take this lock, which is what makes the
/// liveness check and the state mutation atomic with respect to `stop()`.
#[derive(Debug, Default)]
struct SessionControl {
    /// Incremented by every `start()` that actually starts a session
    epoch: u64,
    /// Highest generation applied so far
    last_applied: u64,
    /// Fetches issued by the current session and not yet completed
    session_in_flight: usize,
    /// Ticker task of the running session
    ticker: Option<JoinHandle<()>>,
}

struct PollerInner<F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    config: PollerConfig,
    fetcher: F,
    state: Arc<Mutex<S>>,
    control: Mutex<SessionControl>,
    session: AtomicSessionState,
    metrics: AtomicMetrics,
    next_generation: AtomicU64,
    in_flight: AtomicUsize,
    event_tx: Sender<PollEvent>,
}

/// Periodic fetch-and-apply engine
///
/// - One ticker task per running session, first tick immediate
/// - Each tick spawns its own fetch task bounded by the fetch timeout
/// - Completed fetches are applied only if their session is still the
///   live one and no newer generation has been applied
///
/// # Type Parameters
/// - `F`: Fetcher implementation
/// - `S`: StateHandler receiving `F::Output`
pub struct Poller<F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    inner: Arc<PollerInner<F, S>>,
    event_rx: Receiver<PollEvent>,
}

impl<F, S> Poller<F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    /// Create a poller from its parts
    ///
    /// Use `hyperpoll::builder()` for the type-checked variant.
    pub fn new(config: PollerConfig, fetcher: F, state: Arc<Mutex<S>>) -> Result<Self> {
        config.validate()?;

        let (event_tx, event_rx) = bounded(EVENT_CAPACITY);

        let inner = Arc::new(PollerInner {
            config,
            fetcher,
            state,
            control: Mutex::new(SessionControl::default()),
            session: AtomicSessionState::new(SessionState::Idle),
            metrics: AtomicMetrics::new(),
            next_generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            event_tx,
        });

        Ok(Self { inner, event_rx })
    }

    /// Start polling
    ///
    /// Fetches immediately, then once per interval. Calling this while a
    /// session is already running does nothing. Must be called from within
    /// a Tokio runtime.
    pub fn start(&self) -> Result<()> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(HyperPollError::InvalidState(
                "start() requires a running Tokio runtime".to_string(),
            ));
        }

        let mut control = self.inner.control.lock();
        if self.inner.session.is_running() {
            debug!("[{}] start() while running, ignoring", self.inner.config.name());
            return Ok(());
        }

        control.epoch += 1;
        control.session_in_flight = 0;
        let epoch = control.epoch;
        self.inner.session.set(SessionState::Running);

        let inner = Arc::clone(&self.inner);
        control.ticker = Some(spawn_ticker(self.inner.config.interval(), move || {
            PollerInner::on_tick(&inner, epoch);
        }));

        info!(
            "[{}] Polling started (interval {:?}, session {})",
            self.inner.config.name(),
            self.inner.config.interval(),
            epoch
        );
        self.inner.emit(PollEvent::Started);
        Ok(())
    }

    /// Stop polling
    ///
    /// Safe to call repeatedly or before `start()`. Fetches already issued
    /// keep running but their results are discarded.
    pub fn stop(&self) {
        let mut control = self.inner.control.lock();
        if let Some(handle) = control.ticker.take() {
            handle.abort();
        }

        if self.inner.session.is_running() {
            self.inner.session.set(SessionState::Stopped);
            info!(
                "[{}] Polling stopped (session {}, {} fetch(es) in flight)",
                self.inner.config.name(),
                control.epoch,
                self.inner.in_flight.load(Ordering::Acquire)
            );
            self.inner.emit(PollEvent::Stopped);
        }
    }

    /// Shared handle to the state handler
    pub fn state(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.inner.state)
    }

    /// Get current session state
    #[inline]
    pub fn session_state(&self) -> SessionState {
        self.inner.session.get()
    }

    /// Check if a session is running
    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.session.is_running()
    }

    /// Number of fetches issued but not yet completed
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Get current metrics
    pub fn metrics(&self) -> Metrics {
        self.inner.metrics.snapshot()
    }

    /// Get the configuration
    pub fn config(&self) -> &PollerConfig {
        &self.inner.config
    }

    /// Try to receive an event (non-blocking)
    pub fn try_recv_event(&self) -> Option<PollEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Clone of the event receiver, for consumers living on another thread
    pub fn events(&self) -> Receiver<PollEvent> {
        self.event_rx.clone()
    }
}

impl<F, S> Drop for Poller<F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    fn drop(&mut self) {
        // The ticker task holds the inner Arc; without this it would run forever
        self.stop();
    }
}

impl<F, S> PollerInner<F, S>
where
    F: Fetcher,
    S: StateHandler<F::Output>,
{
    fn on_tick(self: &Arc<Self>, epoch: u64) {
        self.metrics.increment_ticks();

        {
            // Fetches left over from an ended session do not count here
            let mut control = self.control.lock();
            let current = control.epoch == epoch;
            if self.config.overlap() == OverlapPolicy::SkipWhileInFlight
                && current
                && control.session_in_flight > 0
            {
                debug!("[{}] Fetch still in flight, skipping tick", self.config.name());
                self.metrics.increment_skipped();
                self.emit(PollEvent::Skipped);
                return;
            }
            if current {
                control.session_in_flight += 1;
            }
        }

        let generation = self.next_generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        self.emit(PollEvent::Tick(generation));

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let timeout = inner.config.fetch_timeout();
            let outcome = match tokio::time::timeout(timeout, inner.fetcher.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(HyperPollError::Timeout(timeout)),
            };
            inner.in_flight.fetch_sub(1, Ordering::AcqRel);
            inner.apply(epoch, generation, outcome);
        });
    }

    fn apply(&self, epoch: u64, generation: u64, outcome: Result<F::Output>) {
        let mut control = self.control.lock();
        if control.epoch == epoch {
            control.session_in_flight = control.session_in_flight.saturating_sub(1);
        }

        if control.epoch != epoch || !self.session.is_running() {
            debug!(
                "[{}] Discarding fetch #{} from ended session {}",
                self.config.name(),
                generation,
                epoch
            );
            self.metrics.increment_discarded();
            self.emit(PollEvent::Discarded(generation, DiscardReason::SessionEnded));
            return;
        }

        if generation < control.last_applied {
            debug!(
                "[{}] Discarding fetch #{} (already applied #{})",
                self.config.name(),
                generation,
                control.last_applied
            );
            self.metrics.increment_discarded();
            self.emit(PollEvent::Discarded(generation, DiscardReason::Superseded));
            return;
        }
        control.last_applied = generation;

        let mut state = self.state.lock();
        match outcome {
            Ok(output) => {
                state.on_success(output);
                self.metrics.increment_successes();
                self.emit(PollEvent::Applied(generation));
            }
            Err(e) => {
                warn!("[{}] Fetch #{} failed: {}", self.config.name(), generation, e);
                state.on_failure(&e);
                self.metrics.increment_failures();
                self.emit(PollEvent::Failed(generation, e.to_string()));
            }
        }
    }

    fn emit(&self, event: PollEvent) {
        // Full means nobody is draining events
        let _ = self.event_tx.try_send(event);
    }
}
