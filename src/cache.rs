//! Short-lived query cache keyed by entity name and parameters.
//!
//! Callers asking for the same key while a fetch is running share that fetch.
//! Successful results are kept for the configured TTL; errors are never stored.
//! Expired results are swept whenever a fetch takes the lock, so the map holds
//! at most the keys read within one TTL plus those in flight. Invalidation
//! drops ready and in-flight entries alike, and an in-flight fetch that was
//! invalidated does not write its result back.

use crate::error::ApiError;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: &'static str,
    pub params: String,
}

impl QueryKey {
    pub fn new(entity: &'static str) -> Self {
        QueryKey {
            entity,
            params: String::new(),
        }
    }

    pub fn with(entity: &'static str, params: impl Into<String>) -> Self {
        QueryKey {
            entity,
            params: params.into(),
        }
    }
}

type SharedFetch = Shared<BoxFuture<'static, Result<Value, ApiError>>>;

enum Slot {
    Ready { value: Value, fetched_at: Instant },
    InFlight { generation: u64, fetch: SharedFetch },
}

#[derive(Default)]
struct Slots {
    entries: HashMap<QueryKey, Slot>,
    next_generation: u64,
}

impl Slots {
    /// Drop ready results older than `ttl`; in-flight fetches stay.
    fn sweep(&mut self, ttl: Duration) {
        self.entries.retain(|_, slot| match slot {
            Slot::Ready { fetched_at, .. } => fetched_at.elapsed() < ttl,
            Slot::InFlight { .. } => true,
        });
    }
}

pub struct QueryCache {
    ttl: Duration,
    slots: Mutex<Slots>,
}

impl QueryCache {
    /// `ttl` of zero disables result reuse; in-flight sharing still applies.
    pub fn new(ttl: Duration) -> Self {
        QueryCache {
            ttl,
            slots: Mutex::new(Slots::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached value for `key`, or the result of `fetch` (shared with any
    /// concurrent caller for the same key).
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetch: F) -> Result<Value, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>> + Send + 'static,
    {
        let (generation, shared) = {
            let mut slots = self.slots();
            slots.sweep(self.ttl);
            let joined = match slots.entries.get(&key) {
                Some(Slot::Ready { value, fetched_at }) if fetched_at.elapsed() < self.ttl => {
                    tracing::debug!(entity = key.entity, params = %key.params, "cache hit");
                    return Ok(value.clone());
                }
                Some(Slot::InFlight { generation, fetch }) => Some((*generation, fetch.clone())),
                _ => None,
            };
            match joined {
                Some(running) => running,
                None => {
                    let generation = slots.next_generation;
                    slots.next_generation += 1;
                    let shared = fetch().boxed().shared();
                    slots.entries.insert(
                        key.clone(),
                        Slot::InFlight {
                            generation,
                            fetch: shared.clone(),
                        },
                    );
                    (generation, shared)
                }
            }
        };

        let result = shared.await;

        let mut slots = self.slots();
        slots.sweep(self.ttl);
        let still_current = matches!(
            slots.entries.get(&key),
            Some(Slot::InFlight { generation: g, .. }) if *g == generation
        );
        if still_current {
            match &result {
                Ok(value) if !self.ttl.is_zero() => {
                    slots.entries.insert(
                        key,
                        Slot::Ready {
                            value: value.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                }
                _ => {
                    slots.entries.remove(&key);
                }
            }
        }
        result
    }

    /// Drop every entry of `entity` so the next read refetches.
    pub fn invalidate(&self, entity: &str) {
        let mut slots = self.slots();
        let before = slots.entries.len();
        slots.entries.retain(|k, _| k.entity != entity);
        tracing::debug!(entity, dropped = before - slots.entries.len(), "cache invalidated");
    }

    pub fn len(&self) -> usize {
        self.slots().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
