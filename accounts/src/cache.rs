use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

/// Cache key: which credential an account was derived from, and which
/// account index within it.
///
/// `fingerprint` must identify the credential without containing it (for
/// example a hash of the seed), so the key itself is safe to log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub fingerprint: String,
    pub index: u32,
}

impl AccountKey {
    pub fn new(fingerprint: impl Into<String>, index: u32) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            index,
        }
    }
}

/// Explicit cache of constructed accounts, owned by the caller's
/// composition root.
///
/// Separate caches never share entries, so tests and sessions cannot leak
/// accounts into each other.
pub struct AccountCache<A: ?Sized> {
    map: Mutex<HashMap<AccountKey, Arc<A>>>,
}

impl<A: ?Sized> Default for AccountCache<A> {
    fn default() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }
}

impl<A: ?Sized> AccountCache<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &AccountKey) -> Option<Arc<A>> {
        self.map.lock().get(key).cloned()
    }

    /// Insert or replace; returns the previous entry.
    pub fn insert(&self, key: AccountKey, account: Arc<A>) -> Option<Arc<A>> {
        self.map.lock().insert(key, account)
    }

    /// Return the cached account or build it with `init`.
    ///
    /// The lock is not held while `init` runs. When two callers race on the
    /// same key the first insert wins and both get that instance.
    pub async fn get_or_try_init<F, Fut, E>(&self, key: AccountKey, init: F) -> Result<Arc<A>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<A>, E>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        debug!(index = key.index, "account cache miss");
        let built = init().await?;

        let mut map = self.map.lock();
        Ok(map.entry(key).or_insert(built).clone())
    }

    pub fn remove(&self, key: &AccountKey) -> Option<Arc<A>> {
        self.map.lock().remove(key)
    }

    /// Drop every account derived from `fingerprint`.
    pub fn evict_credential(&self, fingerprint: &str) -> usize {
        let mut map = self.map.lock();
        let before = map.len();
        map.retain(|k, _| k.fingerprint != fingerprint);
        before - map.len()
    }

    pub fn clear(&self) {
        let mut map = self.map.lock();
        let count = map.len();
        map.clear();

        info!(count, "account cache cleared");
    }

    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }
}
