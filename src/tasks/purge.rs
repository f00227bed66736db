//! TTL Purge Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expired entries are already unreachable through `get`, so the sweep only
//! reclaims memory; it holds the write lock for one purge at a time and
//! never blocks request handling beyond ordinary lock acquisition.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResultCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. The returned JoinHandle is used to abort the task during
/// graceful shutdown.
///
/// # Arguments
/// * `cache` - Shared reference to the result cache
/// * `purge_interval_secs` - Interval in seconds between sweeps
pub fn spawn_purge_task(
    cache: Arc<RwLock<ResultCache>>,
    purge_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(purge_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL purge task with interval of {} seconds",
            purge_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock only for the sweep itself
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("TTL purge: removed {} expired entries", removed);
            } else {
                debug!("TTL purge: no expired entries found");
            }
        }
    })
}
