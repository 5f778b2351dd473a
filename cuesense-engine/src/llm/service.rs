//! Shared LLM call service: response cache, in-flight de-duplication,
//! concurrency bounding and retry.
//!
//! One instance is built per engine and injected into every judge, so
//! cache and in-flight state live exactly as long as their engine. All
//! shared state sits behind this service's own locks; callers never see
//! it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, OnceCell, Semaphore};
use tracing::{debug, warn};

use super::provider::{ChatRequest, ChatResponse, LlmProvider};
use super::LlmError;
use crate::config::LlmConfig;

struct CacheEntry {
    response: ChatResponse,
    inserted: Instant,
}

type FlightCell = Arc<OnceCell<Result<ChatResponse, LlmError>>>;

/// Call layer shared by all judges of one engine
pub struct LlmService {
    provider: Arc<dyn LlmProvider>,
    cache: Mutex<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, FlightCell>>,
    semaphore: Semaphore,
    ttl: Duration,
    capacity: usize,
    max_attempts: u32,
    backoff: Duration,
}

impl LlmService {
    pub fn new(provider: Arc<dyn LlmProvider>, config: &LlmConfig) -> Self {
        LlmService {
            provider,
            cache: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
            semaphore: Semaphore::new(config.max_concurrency),
            ttl: Duration::from_secs(config.cache_ttl_secs),
            capacity: config.cache_capacity.max(1),
            max_attempts: config.max_attempts.max(1),
            backoff: Duration::from_millis(config.backoff_ms),
        }
    }

    /// Issue a chat call through cache, de-duplication, the concurrency
    /// bound and retry.
    ///
    /// Concurrent calls with the same cache key share one outbound
    /// request; each waiter receives a clone of its outcome, errors
    /// included. The flight slot is cleared afterwards so a later call
    /// with the same key goes back to the network (unless the response
    /// was cached).
    pub async fn call(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let key = request.cache_key();

        if let Some(hit) = self.cache_get(&key).await {
            debug!(provider = self.provider.name(), "LLM cache hit");
            return Ok(hit);
        }

        let (cell, created) = self.join_flight(&key).await;

        let result = cell
            .get_or_init(|| async {
                let outcome = self.execute(&request).await;
                if let Ok(response) = &outcome {
                    self.cache_put(key.clone(), response.clone()).await;
                }
                outcome
            })
            .await
            .clone();

        if created {
            self.in_flight.lock().await.remove(&key);
        }
        result
    }

    /// Join an existing flight for the key or open a new one
    async fn join_flight(&self, key: &str) -> (FlightCell, bool) {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(cell) = in_flight.get(key) {
            debug!("joining in-flight LLM call");
            (cell.clone(), false)
        } else {
            let cell: FlightCell = Arc::new(OnceCell::new());
            in_flight.insert(key.to_string(), cell.clone());
            (cell, true)
        }
    }

    /// The actual outbound attempt loop, gated by the semaphore
    async fn execute(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| LlmError::Network("call service shut down".to_string()))?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.provider.complete(request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    // Linear backoff: attempt number times the base delay
                    let delay = self.backoff * attempt;
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "LLM call failed, retrying in {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn cache_get(&self, key: &str) -> Option<ChatResponse> {
        let mut cache = self.cache.lock().await;
        match cache.get(key) {
            Some(entry) if entry.inserted.elapsed() <= self.ttl => {
                Some(entry.response.clone())
            }
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    async fn cache_put(&self, key: String, response: ChatResponse) {
        let mut cache = self.cache.lock().await;
        if cache.len() >= self.capacity && !cache.contains_key(&key) {
            // Evict expired entries first; only then sacrifice the oldest
            let ttl = self.ttl;
            cache.retain(|_, entry| entry.inserted.elapsed() <= ttl);
            while cache.len() >= self.capacity {
                let oldest = cache
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted)
                    .map(|(k, _)| k.clone());
                match oldest {
                    Some(k) => {
                        cache.remove(&k);
                    }
                    None => break,
                }
            }
        }
        cache.insert(
            key,
            CacheEntry {
                response,
                inserted: Instant::now(),
            },
        );
    }

    /// Current cache population (test and metrics hook)
    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }
}
