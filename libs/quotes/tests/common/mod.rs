//! Common test utilities for quotes integration tests
//!
//! Provides a minimal HTTP server that serves a scripted tickers response.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

/// What the server answers with
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock tickers endpoint
pub struct MockFeedServer {
    pub addr: SocketAddr,
    response: Arc<Mutex<MockResponse>>,
    requests: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
}

impl MockFeedServer {
    /// Create and start a new mock server
    pub async fn start(response: MockResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = Arc::new(Mutex::new(response));
        let requests = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(Notify::new());

        let response_clone = response.clone();
        let requests_clone = requests.clone();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                requests_clone.fetch_add(1, Ordering::SeqCst);
                                let response = response_clone.lock().clone();
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, response).await;
                                });
                            }
                            Err(e) => {
                                eprintln!("Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_clone.notified() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            response,
            requests,
            shutdown,
        }
    }

    async fn handle_connection(mut stream: TcpStream, response: MockResponse) {
        let mut buf = vec![0u8; 4096];
        let mut request = Vec::new();
        loop {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
            }
        }

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        let raw = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            reason(response.status),
            response.body.len(),
            response.body
        );
        let _ = stream.write_all(raw.as_bytes()).await;
        let _ = stream.shutdown().await;
    }

    /// URL of the tickers endpoint
    pub fn url(&self) -> String {
        format!("http://{}/api/v2/tickers", self.addr)
    }

    /// Replace the response for subsequent requests
    pub fn respond_with(&self, response: MockResponse) {
        *self.response.lock() = response;
    }

    /// Number of accepted connections
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_waiters();
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Tickers body with one quote per (symbol, price)
pub fn tickers_body(quotes: &[(&str, &str)]) -> String {
    let data: Vec<String> = quotes
        .iter()
        .map(|(symbol, price)| {
            format!(
                r#"{{"symbol":"{}","price":"{}","bestBidPrice":"{}","bestAskPrice":"{}","bestAskSize":"10","ts":1700000000000}}"#,
                symbol, price, price, price
            )
        })
        .collect();
    format!(r#"{{"code":"200000","data":[{}]}}"#, data.join(","))
}

/// Poll `condition` every 10 ms until it holds or `timeout` elapses
pub async fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
