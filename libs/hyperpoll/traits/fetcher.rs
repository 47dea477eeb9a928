use crate::error::Result;
use async_trait::async_trait;

/// Trait for issuing one fetch per poll tick
///
/// Implement this trait to define how a single snapshot is retrieved
/// from the remote source. The poller calls it once per tick in a
/// dedicated task, so a slow fetch never delays the next tick.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Value produced by a successful fetch
    type Output: Send + 'static;

    /// Issue one request and decode the response
    ///
    /// # Returns
    /// * `Ok(output)` - The decoded snapshot
    /// * `Err(HyperPollError)` - Transport, status or payload failure
    async fn fetch(&self) -> Result<Self::Output>;
}
