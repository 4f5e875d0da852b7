//! Text-format loader for embedding files.
//!
//! ## File format
//!
//! Each line is whitespace-separated tokens: token 0 is the name, the rest
//! are the floating-point components of its vector.
//!
//! ```text
//! king 0.12 -0.33 0.98 ...
//! queen 0.10 -0.31 0.97 ...
//! ```
//!
//! Files with a `.vec` extension (fastText convention) carry a two-integer
//! `count dimension` header line. The header is consumed and discarded: the
//! store's dimension is configured by the caller, and a disagreement between
//! the header and the actual row width is not cross-checked here — a bad row
//! width still fails, but against the configured dimension.
//!
//! Malformed rows fail fast with `MalformedRecord` carrying the 1-based
//! line number; the loader never silently admits a partial vector.

#![warn(missing_docs)]

pub mod truncate;

pub use truncate::{cut_file_name, truncate_to};

use lexvec_core::{VectorError, VectorResult};
use lexvec_engine::{VectorStore, DEFAULT_DIMENSION};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

/// Extension that signals a `count dimension` header line.
const HEADER_EXTENSION: &str = "vec";

/// Load a vector file into a store configured for `dimension`.
///
/// A `.vec` extension triggers header-line skipping; any other extension is
/// read from the first line.
///
/// # Errors
/// - `Io` on read failure.
/// - `MalformedRecord` for a non-numeric component, a row of the wrong
///   width, or an unreadable header.
pub fn load_path(path: impl AsRef<Path>, dimension: usize) -> VectorResult<VectorStore> {
    let path = path.as_ref();
    let skip_header = path
        .extension()
        .is_some_and(|ext| ext == HEADER_EXTENSION);

    let start = Instant::now();
    let file = File::open(path)?;
    let store = load_reader(file, dimension, skip_header)?;
    tracing::info!(
        path = %path.display(),
        entries = store.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded vector file"
    );
    Ok(store)
}

/// [`load_path`] with the conventional 300-dimension configuration.
pub fn load_path_default(path: impl AsRef<Path>) -> VectorResult<VectorStore> {
    load_path(path, DEFAULT_DIMENSION)
}

/// Load vectors from any reader.
///
/// `skip_header` discards the first line after checking it parses as two
/// integers (`count dimension`); neither value is cross-checked against
/// `dimension`.
pub fn load_reader<R: Read>(
    reader: R,
    dimension: usize,
    skip_header: bool,
) -> VectorResult<VectorStore> {
    let mut store = VectorStore::new(dimension);
    let mut lines = BufReader::new(reader).lines().enumerate();

    if skip_header {
        match lines.next() {
            Some((line_idx, line)) => parse_header(line_idx + 1, &line?)?,
            None => {
                return Err(VectorError::MalformedRecord {
                    line: 1,
                    reason: "missing header line".to_string(),
                })
            }
        }
    }

    for (line_idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (name, vector) = parse_record(line_idx + 1, &line, dimension)?;
        // parse_record has already enforced the width, so add cannot fail.
        store.add(name, vector)?;
    }

    Ok(store)
}

/// Parse the `count dimension` header of a `.vec` file. Values are
/// validated but otherwise unused.
fn parse_header(line_no: usize, line: &str) -> VectorResult<()> {
    let mut fields = line.split_whitespace();
    for _ in 0..2 {
        let field = fields.next().ok_or_else(|| VectorError::MalformedRecord {
            line: line_no,
            reason: "header must be two integers: count dimension".to_string(),
        })?;
        field
            .parse::<u64>()
            .map_err(|e| VectorError::MalformedRecord {
                line: line_no,
                reason: format!("bad header field '{field}': {e}"),
            })?;
    }
    Ok(())
}

/// Parse one `name c1 c2 … cD` record.
fn parse_record(line_no: usize, line: &str, dimension: usize) -> VectorResult<(String, Vec<f32>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or_else(|| VectorError::MalformedRecord {
        line: line_no,
        reason: "blank record".to_string(),
    })?;

    let mut vector = Vec::with_capacity(dimension);
    for token in tokens {
        let value = token
            .parse::<f32>()
            .map_err(|e| VectorError::MalformedRecord {
                line: line_no,
                reason: format!("bad component '{token}': {e}"),
            })?;
        vector.push(value);
    }

    if vector.len() != dimension {
        return Err(VectorError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {dimension} components, found {}",
                vector.len()
            ),
        });
    }

    Ok((name.to_string(), vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_plain_records() {
        let data = "king 1.0 0.5 0.25\nqueen 0.9 0.6 0.3\n";
        let store = load_reader(Cursor::new(data), 3, false).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("king"), Some(&[1.0, 0.5, 0.25][..]));
        assert_eq!(store.get("queen"), Some(&[0.9, 0.6, 0.3][..]));
    }

    #[test]
    fn skips_blank_lines() {
        let data = "a 1.0 2.0\n\nb 3.0 4.0\n";
        let store = load_reader(Cursor::new(data), 2, false).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn header_is_consumed_not_cross_checked() {
        // Header declares 999 dims; rows are 2-wide and that is what counts.
        let data = "5 999\na 1.0 2.0\n";
        let store = load_reader(Cursor::new(data), 2, true).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.contains("5"));
    }

    #[test]
    fn bad_header_fails() {
        let data = "not a header\na 1.0 2.0\n";
        let result = load_reader(Cursor::new(data), 2, true);
        assert!(
            matches!(result, Err(VectorError::MalformedRecord { line: 1, .. }))
        );
    }

    #[test]
    fn non_numeric_component_fails_with_line_number() {
        let data = "a 1.0 2.0\nb 3.0 oops\n";
        let result = load_reader(Cursor::new(data), 2, false);
        match result {
            Err(VectorError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("oops"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn wrong_row_width_fails_with_line_number() {
        let data = "a 1.0 2.0 3.0\nb 1.0 2.0\n";
        let result = load_reader(Cursor::new(data), 3, false);
        match result {
            Err(VectorError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 3"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn vec_extension_triggers_header_skip() {
        let mut file = tempfile::Builder::new().suffix(".vec").tempfile().unwrap();
        writeln!(file, "2 3").unwrap();
        writeln!(file, "a 1.0 2.0 3.0").unwrap();
        writeln!(file, "b 4.0 5.0 6.0").unwrap();

        let store = load_path(file.path(), 3).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn txt_extension_reads_first_line_as_data() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a 1.0 2.0").unwrap();

        let store = load_path(file.path(), 2).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains("a"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_path("/nonexistent/embeddings.txt", 300);
        assert!(matches!(result, Err(VectorError::Io(_))));
    }
}
