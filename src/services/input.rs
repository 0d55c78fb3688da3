// Input Collection
// Reads text from files or stdin; files are subject to the upload size limit
// and extension allowlist

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Largest accepted file, in bytes.
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["txt", "md", "rtf"];

#[derive(Error, Debug)]
pub enum InputError {
    #[error("unsupported file type for {0}; expected .txt, .md or .rtf")]
    UnsupportedType(PathBuf),
    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

pub fn is_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// Decode raw input and drop leading and trailing whitespace.
fn decode_trimmed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

/// Read a text file for analysis.
///
/// Type and size are checked before the contents are read. Invalid UTF-8 is
/// replaced rather than rejected, and the text is trimmed.
pub fn read_input_file(path: &Path) -> Result<String, InputError> {
    if !is_allowed_extension(path) {
        return Err(InputError::UnsupportedType(path.to_path_buf()));
    }

    let io_err = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_FILE_BYTES {
        return Err(InputError::TooLarge {
            size,
            limit: MAX_FILE_BYTES,
        });
    }

    let bytes = fs::read(path).map_err(io_err)?;
    debug!(path = %path.display(), bytes = bytes.len(), "input.read");
    Ok(decode_trimmed(&bytes))
}

/// Read all of `reader` (stdin in the CLI) as trimmed text.
pub fn read_input_stream<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(InputError::Stdin)?;
    debug!(bytes = bytes.len(), "input.read_stream");
    Ok(decode_trimmed(&bytes))
}
