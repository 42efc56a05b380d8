//! Lazily rebuilt serialized snapshot with Fresh/Stale tracking

use bytes::Bytes;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Holds the serialized form of a collection and rebuilds it on demand.
///
/// Starts Stale. A read of a Fresh snapshot only takes the shared lock. A read
/// of a Stale snapshot takes the exclusive lock, checks again, and rebuilds at
/// most once per staleness window; concurrent readers queue on the lock and
/// then see the published bytes.
pub struct SnapshotCache {
    state: RwLock<Snapshot>,
    rebuilds: AtomicU64,
}

struct Snapshot {
    bytes: Bytes,
    stale: bool,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Snapshot {
                bytes: Bytes::new(),
                stale: true,
            }),
            rebuilds: AtomicU64::new(0),
        }
    }

    /// Return the current snapshot, running `build` first if it is Stale.
    ///
    /// `build` runs while the exclusive lock is held, so no reader can see a
    /// half-published value. If it fails the snapshot stays Stale and the error
    /// is returned to the caller; the next read tries again.
    pub async fn get_or_rebuild<F, Fut, E>(&self, build: F) -> Result<Bytes, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Bytes, E>>,
    {
        {
            let snapshot = self.state.read().await;
            if !snapshot.stale {
                return Ok(snapshot.bytes.clone());
            }
        }

        let mut snapshot = self.state.write().await;
        // Another reader may have rebuilt while we waited for the write lock
        if snapshot.stale {
            let bytes = build().await?;
            snapshot.bytes = bytes;
            snapshot.stale = false;
            let count = self.rebuilds.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(
                "Snapshot rebuilt ({} bytes, rebuild #{})",
                snapshot.bytes.len(),
                count
            );
        }

        Ok(snapshot.bytes.clone())
    }

    /// Mark the snapshot Stale so the next read rebuilds it
    pub async fn invalidate(&self) {
        self.state.write().await.stale = true;
    }

    #[cfg(test)]
    pub async fn is_fresh(&self) -> bool {
        !self.state.read().await.stale
    }

    /// Number of successful rebuilds since startup
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds.load(Ordering::Relaxed)
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}
