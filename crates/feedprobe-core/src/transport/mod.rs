//! HTTP transport seam.
//!
//! The locator only depends on [`Transport`]; [`CurlTransport`] is the
//! libcurl-backed implementation used by the binary. Every call returns a
//! fresh [`Response`] so nothing from one request can bleed into the next.

mod easy;
mod error;
mod parse;

pub use easy::CurlTransport;
pub use error::{classify_curl_error, TransportError, TransportErrorKind};

use std::collections::HashMap;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Head => f.write_str("HEAD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// One request, split the way callers think about it: host and path apart.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub method: Method,
    pub scheme: Scheme,
    /// Host name, optionally with `:port`.
    pub host: &'a str,
    /// Absolute path starting with `/`.
    pub path: &'a str,
    pub query: &'a [(String, String)],
    pub cookies: &'a [(String, String)],
    pub headers: &'a [(String, String)],
}

impl<'a> Request<'a> {
    /// Bare GET: no query, no cookies, no extra headers.
    pub fn get(scheme: Scheme, host: &'a str, path: &'a str) -> Self {
        Self {
            method: Method::Get,
            scheme,
            host,
            path,
            query: &[],
            cookies: &[],
            headers: &[],
        }
    }

    /// Assemble the full URL, percent-encoding the query pairs.
    pub fn url(&self) -> Result<Url, TransportError> {
        let raw = format!("{}://{}", self.scheme.as_str(), self.host);
        let mut url = Url::parse(&raw).map_err(|source| TransportError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        if url.host_str().is_none() || url.path() != "/" || url.query().is_some() {
            return Err(TransportError::InvalidHost(self.host.to_string()));
        }
        url.set_path(self.path);
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

/// Status, headers (lower-cased names) and the full body of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status: u32,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Performs a request and hands back the complete response.
///
/// Any status code is a successful transport call; only network-level
/// failures are errors.
pub trait Transport {
    fn perform(&self, request: &Request<'_>) -> Result<Response, TransportError>;
}
