pub mod config;
pub mod logging;

pub mod content_type;
pub mod locator;
pub mod transcode;
pub mod transport;

pub use locator::{
    FeedBody, FetchResult, LocateError, Locator, RejectedAttempt, Rejection, CANDIDATE_PATHS,
};
