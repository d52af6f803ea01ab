//! Simulated network latency.
//!
//! Every service operation pauses before touching the collection, the way a
//! playground's mock API stalls each call. [`Latency::none`] turns the pauses
//! off for tests and impatient clients.

use std::time::Duration;
use tokio::time::sleep;

pub const DEFAULT: Duration = Duration::from_millis(300);
pub const SEARCH: Duration = Duration::from_millis(200);
pub const LIKE: Duration = Duration::from_millis(100);
pub const VIEW: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub async fn pause(&self, delay: Duration) {
        if self.enabled {
            sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}
