//! Reading the document to analyze from a file, stdin or the command line

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use plagscan_core::bail_usage;
use plagscan_core::corpus::{decode_text, TextEncoding};
use plagscan_core::error::{Result, ScanError};
use tracing::{debug, warn};

const STDIN_MARKER: &str = "-";

/// Resolve the input text: literal `--text`, a file path, or stdin
pub fn read_input(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    match file {
        Some(path) if path != Path::new(STDIN_MARKER) => read_file(path),
        _ => read_stdin(),
    }
}

/// Read a document file, falling back to latin-1 when it is not UTF-8
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ScanError::input_unavailable(path, e))?;
    let (text, encoding) = decode_text(bytes);
    if encoding == TextEncoding::Latin1 {
        warn!(path = %path.display(), "Input is not valid UTF-8, decoded as latin-1");
    }
    debug!(path = %path.display(), chars = text.chars().count(), "read_input");
    Ok(text)
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail_usage!("no input: pass a FILE, --text, or pipe text on stdin");
    }

    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .map_err(|e| ScanError::input_unavailable(STDIN_MARKER, e))?;
    Ok(decode_text(bytes).0)
}
