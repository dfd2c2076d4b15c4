use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// Per-user serialization point for document mutations.
///
/// Every handler that rewrites a user's document acquires that user's lock
/// before loading state, so two concurrent requests against the same user
/// cannot both read the same starting balance and clobber each other's
/// write. Lock entries are never evicted; the map is bounded by the number
/// of distinct users seen by this process.
#[derive(Clone, Default)]
pub struct UserLocks {
    inner: Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a user, waiting if another request holds it.
    pub async fn acquire(&self, user_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().expect("user lock map poisoned");
            Arc::clone(map.entry(user_id).or_default())
        };
        lock.lock_owned().await
    }
}
