//! libcurl easy-handle transport.

use super::parse::{header_line, parse_header_lines};
use super::{Method, Request, Response, Transport, TransportError};
use crate::config::TransportConfig;
use std::time::Duration;

/// Blocking transport: one fresh curl easy handle per request.
///
/// Holds only configuration, so it can be shared across probe threads.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    config: TransportConfig,
}

impl CurlTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl Transport for CurlTransport {
    fn perform(&self, request: &Request<'_>) -> Result<Response, TransportError> {
        let url = request.url()?;
        let limit = self.config.max_body_bytes;
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        let mut too_large = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        match request.method {
            Method::Get => easy.get(true)?,
            Method::Head => easy.nobody(true)?,
        }
        easy.follow_location(self.config.follow_redirects)?;
        if self.config.follow_redirects {
            easy.max_redirections(10)?;
        }
        easy.connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.config.timeout_secs))?;

        if !request.headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (k, v) in request.headers {
                list.append(&format!("{}: {}", k.trim(), v.trim()))?;
            }
            easy.http_headers(list)?;
        }
        if !request.cookies.is_empty() {
            let cookies = request
                .cookies
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            easy.cookie(&cookies)?;
        }

        tracing::debug!("{} {}", request.method, url);

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                header_lines.push(header_line(data));
                true
            })?;
            transfer.write_function(|data| {
                if body.len() as u64 + data.len() as u64 > limit {
                    too_large = true;
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if too_large {
            return Err(TransportError::BodyTooLarge { limit });
        }
        performed?;

        let status = easy.response_code()?;
        Ok(Response {
            status,
            headers: parse_header_lines(&header_lines),
            body,
        })
    }
}
