use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while acquiring a configuration export.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The file contents were not valid UTF-8.
    #[error("config file {path} is not valid UTF-8: {source}")]
    Utf8 {
        path: String,
        source: std::string::FromUtf8Error,
    },
}

/// Read a configuration export as UTF-8 text, dropping a leading byte-order mark.
pub fn read_file(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ReadError::Utf8 {
        path: path.display().to_string(),
        source,
    })?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Read a configuration export and split it into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let text = read_file(path)?;
    Ok(split_lines(&text))
}

/// Split text on `\n`, removing one trailing `\r` per line.
///
/// Any other surrounding whitespace is kept; downstream consumers see lines
/// verbatim.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
