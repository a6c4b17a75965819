use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Encoding a text file was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1.
///
/// Every byte sequence is valid ISO-8859-1, so decoding itself never
/// fails; only reading the file can.
pub fn decode_text(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(e) => {
            let text = e.as_bytes().iter().map(|&b| char::from(b)).collect();
            (text, TextEncoding::Latin1)
        }
    }
}

/// Read a text file with the UTF-8 / ISO-8859-1 fallback
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, encoding) = decode_text(bytes);
    if encoding == TextEncoding::Latin1 {
        warn!(path = %path.display(), "Not valid UTF-8, decoded as latin-1");
    }
    Ok(text)
}
