//! Parse raw response header lines into a lower-cased header map.

use std::collections::HashMap;

/// One raw header line from curl. Invalid UTF-8 is replaced, not dropped.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Build the header map for the last response in `lines`.
///
/// A status line (`HTTP/...`) starts a new response, so headers from
/// redirect hops are discarded. Repeated names keep the last value.
pub(crate) fn parse_header_lines(lines: &[String]) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    headers
}
