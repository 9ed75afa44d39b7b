//! Feed discovery by probing well-known feed paths.
//!
//! Candidate paths are tried in priority order against `http://{site}`.
//! A path is accepted only on status 200 with a feed media type; every
//! other outcome is logged and the next path is tried. The first accepted
//! path wins.

mod concurrent;
mod probe;

use crate::transcode::{self, TranscodeError};
use crate::transport::{Transport, TransportError};
use probe::{probe, Accepted};
use std::borrow::Cow;
use thiserror::Error;

/// Feed paths in priority order, most common hosting platform first.
pub const CANDIDATE_PATHS: [&str; 3] = [
    "/rss",     // tumblr.com
    "/feed/",   // wordpress.com
    "/rss.xml", // blogspot
];

/// Why one candidate path was not accepted.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP status {0}")]
    Status(u32),
    #[error("no content-type")]
    MissingContentType,
    #[error("bad content type: {0}")]
    UnacceptableContentType(String),
}

/// A path that was tried and rejected. Carries no body.
#[derive(Debug)]
pub struct RejectedAttempt {
    pub path: &'static str,
    pub reason: Rejection,
}

/// The accepted feed.
#[derive(Debug)]
pub struct FeedBody {
    /// Candidate path that produced the feed.
    pub path: &'static str,
    /// Raw body bytes as served.
    pub body: Vec<u8>,
    /// Charset declared in `Content-Type`, if any.
    pub encoding: Option<String>,
    /// Higher-priority paths that were rejected first, in order.
    pub rejected: Vec<RejectedAttempt>,
}

impl FeedBody {
    /// Body re-encoded from the declared charset to UTF-8.
    pub fn to_utf8(&self) -> Result<Cow<'_, [u8]>, TranscodeError> {
        transcode::to_utf8(&self.body, self.encoding.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("invalid site {0:?}: expected a bare host name")]
    InvalidSite(String),
    #[error("no feed found for site {site}")]
    Exhausted {
        site: String,
        rejected: Vec<RejectedAttempt>,
    },
}

pub type FetchResult = Result<FeedBody, LocateError>;

/// Drives discovery over a [`Transport`].
#[derive(Debug, Clone)]
pub struct Locator<T> {
    transport: T,
}

impl<T: Transport> Locator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Try each candidate path in turn; return the first acceptable feed.
    ///
    /// Exactly one request per path, one at a time, stopping at the first
    /// success.
    pub fn locate(&self, site: &str) -> FetchResult {
        validate_site(site)?;

        let mut rejected = Vec::new();
        for path in CANDIDATE_PATHS {
            tracing::info!("try with {} for {}", path, site);
            match probe(&self.transport, site, path) {
                Ok(accepted) => return Ok(accepted.into_feed(path, rejected)),
                Err(reason) => rejected.push(reject(site, path, reason)),
            }
        }

        exhausted(site, rejected)
    }
}

fn validate_site(site: &str) -> Result<(), LocateError> {
    let bad = site.is_empty()
        || site
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | '\\'));
    if bad {
        return Err(LocateError::InvalidSite(site.to_string()));
    }
    Ok(())
}

fn reject(site: &str, path: &'static str, reason: Rejection) -> RejectedAttempt {
    match &reason {
        Rejection::Transport(e) => {
            tracing::warn!(kind = ?e.kind(), "{}{}: {}", site, path, reason)
        }
        _ => tracing::warn!("{}{}: {}", site, path, reason),
    }
    RejectedAttempt { path, reason }
}

fn exhausted(site: &str, rejected: Vec<RejectedAttempt>) -> FetchResult {
    tracing::error!("can't fetch feed for {}", site);
    Err(LocateError::Exhausted {
        site: site.to_string(),
        rejected,
    })
}

impl Accepted {
    fn into_feed(self, path: &'static str, rejected: Vec<RejectedAttempt>) -> FeedBody {
        tracing::debug!(
            "accepted {} ({} bytes, encoding {:?})",
            path,
            self.body.len(),
            self.encoding
        );
        FeedBody {
            path,
            body: self.body,
            encoding: self.encoding,
            rejected,
        }
    }
}
