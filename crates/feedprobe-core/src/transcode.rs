//! Re-encode a feed body from its declared charset to UTF-8.
//!
//! Only the server's declared label is honoured: no sniffing, no BOM
//! handling, no fallback encoding. Undecodable input is an error rather
//! than something patched over with replacement characters.

use encoding_rs::Encoding;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("unsupported encoding {0:?}")]
    UnsupportedEncoding(String),
    #[error("body is not valid {encoding}")]
    Malformed { encoding: String },
}

/// Convert `body` to UTF-8 according to `encoding`.
///
/// With no (or an empty) encoding the body is returned untouched.
pub fn to_utf8<'a>(
    body: &'a [u8],
    encoding: Option<&str>,
) -> Result<Cow<'a, [u8]>, TranscodeError> {
    let label = match encoding.map(str::trim) {
        Some(label) if !label.is_empty() => label,
        _ => return Ok(Cow::Borrowed(body)),
    };

    // WHATWG maps these labels to windows-1252; decode them as declared.
    if is_label_in(label, LATIN1_LABELS) {
        return Ok(decode_latin1(body));
    }
    if is_label_in(label, ASCII_LABELS) {
        return decode_ascii(body);
    }

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| TranscodeError::UnsupportedEncoding(label.to_string()))?;

    let decoded = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| TranscodeError::Malformed {
            encoding: encoding.name().to_string(),
        })?;

    tracing::debug!("decoded {} bytes as {}", body.len(), encoding.name());

    Ok(match decoded {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    })
}

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "latin-1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
    "8859",
];

const ASCII_LABELS: &[&str] = &[
    "us-ascii",
    "ascii",
    "us",
    "ansi_x3.4-1968",
    "iso646-us",
    "646",
    "cp367",
    "ibm367",
    "csascii",
];

fn is_label_in(label: &str, labels: &[&str]) -> bool {
    labels.iter().any(|l| l.eq_ignore_ascii_case(label))
}

/// Every byte is the code point of the same value, C1 controls included.
fn decode_latin1(body: &[u8]) -> Cow<'_, [u8]> {
    if body.is_ascii() {
        return Cow::Borrowed(body);
    }
    let text: String = body.iter().map(|&b| char::from(b)).collect();
    Cow::Owned(text.into_bytes())
}

fn decode_ascii(body: &[u8]) -> Result<Cow<'_, [u8]>, TranscodeError> {
    if !body.is_ascii() {
        return Err(TranscodeError::Malformed {
            encoding: "US-ASCII".to_string(),
        });
    }
    Ok(Cow::Borrowed(body))
}
