//! Process-wide request statistics
//!
//! A single mutex guards all three counters so a snapshot never observes a
//! half-applied update. The registry is a cheap handle; clone it into every
//! connection task.

use std::sync::Arc;
use tokio::sync::Mutex;

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Requests that produced a non-empty read
    pub requests_handled: u64,

    /// Bytes read from clients
    pub bytes_received: u64,

    /// Bytes written to clients
    pub bytes_sent: u64,
}

/// Shared, monotonically increasing server counters
#[derive(Debug, Clone, Default)]
pub struct StatsRegistry {
    counters: Arc<Mutex<StatsSnapshot>>,
}

impl StatsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn increment_requests(&self) {
        let mut counters = self.counters.lock().await;
        counters.requests_handled += 1;
    }

    pub async fn add_bytes_received(&self, n: u64) {
        let mut counters = self.counters.lock().await;
        counters.bytes_received += n;
    }

    pub async fn add_bytes_sent(&self, n: u64) {
        let mut counters = self.counters.lock().await;
        counters.bytes_sent += n;
    }

    /// Count one incoming request of `bytes_in` bytes under a single lock.
    pub async fn record_request(&self, bytes_in: u64) {
        let mut counters = self.counters.lock().await;
        counters.requests_handled += 1;
        counters.bytes_received += bytes_in;
    }

    pub async fn snapshot(&self) -> StatsSnapshot {
        *self.counters.lock().await
    }
}
