//! Construction of a [`super::Parser`] from the three input shapes a
//! record-database reader needs to support: a streaming byte source, a
//! NUL-terminated string, and a sized memory buffer.
//!
//! Split into dedicated constructor functions rather than one with a mode
//! flag; since the data model here is owned rather than zero-copy, all
//! three modes converge on a single owned `String`.

use std::io::{self, Read as IoRead};

use crate::error::{Error, Result};

/// Read the full contents of an already-validated UTF-8 document,
/// regardless of which construction mode produced it.
pub(super) fn from_str_source(s: &str) -> String {
    s.to_string()
}

/// From a sized memory buffer that may or may not be valid UTF-8.
pub(super) fn from_slice_source(bytes: &[u8]) -> Result<String> {
    Ok(std::str::from_utf8(bytes)?.to_string())
}

/// From a NUL-terminated string: only the bytes up to (not including) the
/// first NUL are significant.
pub(super) fn from_c_str_source(bytes: &[u8]) -> Result<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    from_slice_source(&bytes[..end])
}

/// From a blocking streaming byte source (e.g. standard input). The parser
/// is synchronous and CPU-bound: read the source to completion up front
/// rather than interleaving I/O with parsing.
pub(super) fn from_reader_source<R: IoRead>(mut reader: R) -> Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| Error::from(io::Error::from(e)))?;
    from_slice_source(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_is_reported_as_a_utf8_error() {
        let err = from_slice_source(&[b'a', 0xff, b'b']).unwrap_err();
        assert!(err.is_utf8());
    }
}
