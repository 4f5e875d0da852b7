//! Head-truncation for large embedding files.
//!
//! Pre-trained embedding files run to millions of rows; cutting one down to
//! its first N entries makes interactive experimentation tolerable. The cut
//! preserves the `.vec` header line when present, so the output loads the
//! same way the input did (the header's count is NOT rewritten; loaders do
//! not cross-check it).

use lexvec_core::{VectorError, VectorResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Copy the first `limit` data lines of `src` to `dst`.
///
/// For a `.vec` source the header line is passed through first and does not
/// count against `limit`.
///
/// # Errors
/// `Io` on read/write failure; `MalformedRecord` if a `.vec` source is
/// empty where its header should be.
pub fn truncate_to(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    limit: usize,
) -> VectorResult<()> {
    let src = src.as_ref();
    let has_header = src.extension().is_some_and(|ext| ext == "vec");

    let reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst.as_ref())?);

    let mut lines = reader.lines();
    if has_header {
        let header = lines.next().ok_or_else(|| VectorError::MalformedRecord {
            line: 1,
            reason: "missing header line".to_string(),
        })??;
        writeln!(writer, "{header}")?;
    }

    for line in lines.take(limit) {
        writeln!(writer, "{}", line?)?;
    }
    writer.flush()?;

    tracing::info!(
        src = %src.display(),
        dst = %dst.as_ref().display(),
        limit,
        "wrote truncated vector file"
    );
    Ok(())
}

/// Conventional output name for a cut file: `<stem>-cut-to-<limit>.<ext>`.
///
/// A source without an extension just gets the suffix appended to its stem.
pub fn cut_file_name(path: impl AsRef<Path>, limit: usize) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cut = match path.extension() {
        Some(ext) => format!("{stem}-cut-to-{limit}.{}", ext.to_string_lossy()),
        None => format!("{stem}-cut-to-{limit}"),
    };
    path.with_file_name(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn read_lines(path: &Path) -> Vec<String> {
        let reader = BufReader::new(File::open(path).unwrap());
        reader.lines().map(|l| l.unwrap()).collect()
    }

    #[test]
    fn cuts_to_limit() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        for i in 0..10 {
            writeln!(file, "w{i} 1.0 2.0").unwrap();
        }
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("cut.txt");

        truncate_to(file.path(), &dst, 3).unwrap();
        let lines = read_lines(&dst);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "w0 1.0 2.0");
        assert_eq!(lines[2], "w2 1.0 2.0");
    }

    #[test]
    fn vec_header_passes_through_and_does_not_count() {
        let mut file = tempfile::Builder::new().suffix(".vec").tempfile().unwrap();
        writeln!(file, "10 2").unwrap();
        for i in 0..10 {
            writeln!(file, "w{i} 1.0 2.0").unwrap();
        }
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("cut.vec");

        truncate_to(file.path(), &dst, 2).unwrap();
        let lines = read_lines(&dst);
        assert_eq!(lines, vec!["10 2", "w0 1.0 2.0", "w1 1.0 2.0"]);
    }

    #[test]
    fn limit_beyond_length_copies_everything() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "a 1.0").unwrap();
        writeln!(file, "b 2.0").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("cut.txt");

        truncate_to(file.path(), &dst, 100).unwrap();
        assert_eq!(read_lines(&dst).len(), 2);
    }

    #[test]
    fn cut_file_name_convention() {
        assert_eq!(
            cut_file_name("/data/crawl.vec", 50000),
            PathBuf::from("/data/crawl-cut-to-50000.vec")
        );
        assert_eq!(
            cut_file_name("embeddings.txt", 10),
            PathBuf::from("embeddings-cut-to-10.txt")
        );
    }
}
