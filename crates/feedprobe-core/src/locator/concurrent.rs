//! Parallel probing with the same result as the sequential loop.
//!
//! All candidate paths are fetched at once on scoped threads. Outcomes are
//! collected in path order and the lowest-index success wins, regardless
//! of which request finished first. The caller's subscriber is installed on
//! each probe thread, so transport logs are not lost.

use super::{exhausted, probe, reject, validate_site, FetchResult, Locator, CANDIDATE_PATHS};
use crate::transport::Transport;
use std::thread;

impl<T: Transport + Sync> Locator<T> {
    /// Probe every candidate path concurrently.
    pub fn locate_concurrent(&self, site: &str) -> FetchResult {
        validate_site(site)?;

        let transport = &self.transport;
        let dispatch = tracing::dispatcher::get_default(|d| d.clone());
        let outcomes: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = CANDIDATE_PATHS
                .iter()
                .map(|&path| {
                    tracing::info!("try with {} for {}", path, site);
                    let dispatch = dispatch.clone();
                    s.spawn(move || {
                        tracing::dispatcher::with_default(&dispatch, || {
                            probe(transport, site, path)
                        })
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });

        let mut rejected = Vec::new();
        let mut outcomes = CANDIDATE_PATHS.into_iter().zip(outcomes);
        while let Some((path, outcome)) = outcomes.next() {
            match outcome {
                Ok(accepted) => {
                    for (later, _) in outcomes.by_ref() {
                        tracing::debug!("ignoring {} for {}: {} won", later, site, path);
                    }
                    return Ok(accepted.into_feed(path, rejected));
                }
                Err(reason) => rejected.push(reject(site, path, reason)),
            }
        }

        exhausted(site, rejected)
    }
}
