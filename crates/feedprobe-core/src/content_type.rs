//! `Content-Type` header parsing and the feed media-type whitelist.

/// Media types we accept as a syndication feed. Anything else (HTML error
/// pages, JSON, plain text) is rejected even with a 200 status.
pub const FEED_MEDIA_TYPES: [&str; 4] = [
    "application/atom+xml",
    "application/rss+xml",
    "text/xml",
    "application/xml",
];

/// A parsed `Content-Type` value: bare media type plus optional charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Trimmed and lower-cased, e.g. `application/rss+xml`.
    pub media_type: String,
    /// Declared charset with its original case, e.g. `ISO-8859-1`.
    pub charset: Option<String>,
}

impl ContentType {
    /// Split `type/subtype; charset=XYZ` into its parts.
    ///
    /// Parameters other than `charset` are ignored. An empty charset
    /// value is treated as absent.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(';');
        let media_type = parts
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let charset = parts
            .filter_map(|param| param.split_once('='))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
            .map(|(_, value)| value.trim().trim_matches('"').trim().to_string())
            .filter(|value| !value.is_empty());

        Self {
            media_type,
            charset,
        }
    }

    pub fn is_feed(&self) -> bool {
        FEED_MEDIA_TYPES.contains(&self.media_type.as_str())
    }
}
