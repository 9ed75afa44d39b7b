//! A single probe: one GET, then status and content-type checks.

use super::Rejection;
use crate::content_type::ContentType;
use crate::transport::{Request, Scheme, Transport};

/// Body and declared charset of an accepted response.
#[derive(Debug)]
pub(super) struct Accepted {
    pub(super) body: Vec<u8>,
    pub(super) encoding: Option<String>,
}

/// Fetch `http://{site}{path}` and decide whether it is a feed.
///
/// The response is owned by this call; on rejection it is dropped here.
pub(super) fn probe<T: Transport + ?Sized>(
    transport: &T,
    site: &str,
    path: &str,
) -> Result<Accepted, Rejection> {
    let response = transport.perform(&Request::get(Scheme::Http, site, path))?;
    if response.status != 200 {
        return Err(Rejection::Status(response.status));
    }

    let content_type = match response.header("content-type").map(str::trim) {
        Some(raw) if !raw.is_empty() => ContentType::parse(raw),
        _ => return Err(Rejection::MissingContentType),
    };
    if !content_type.is_feed() {
        return Err(Rejection::UnacceptableContentType(content_type.media_type));
    }

    Ok(Accepted {
        body: response.body,
        encoding: content_type.charset,
    })
}
