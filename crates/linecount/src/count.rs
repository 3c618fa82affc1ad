use std::io::BufRead;

/// Line count of a single file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub mode: crate::config::Mode,
    pub path: std::path::PathBuf,
    pub lines: u64,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:>8} {}",
            self.mode.tag(),
            self.lines,
            self.path.display()
        )
    }
}

/// Counts `\n` bytes by streaming the file through a `BufReader`.
///
/// # Errors
///
/// - `std::io::Error` if the file cannot be opened or read.
pub fn count_buffered(path: impl AsRef<std::path::Path>) -> std::io::Result<u64> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let mut lines = 0u64;

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }

        lines += memchr::memchr_iter(b'\n', chunk).count() as u64;

        let consumed = chunk.len();
        reader.consume(consumed);
    }

    Ok(lines)
}

/// Counts `\n` bytes across a memory mapping of the whole file.
///
/// # Errors
///
/// - [`mapping::MapError`] if the file cannot be mapped.
pub fn count_mapped(path: impl AsRef<std::path::Path>) -> mapping::MapResult<u64> {
    let mapped = mapping::MappedFile::open(path)?;
    Ok(memchr::memchr_iter(b'\n', &mapped).count() as u64)
}

/// Counts the lines of `path` using `mode`.
///
/// # Errors
///
/// - [`crate::errors::CountError`] naming the path and the failing step.
pub fn count(
    mode: crate::config::Mode,
    path: impl AsRef<std::path::Path>,
) -> crate::errors::CountResult<Report> {
    let path = path.as_ref();

    let lines = match mode {
        crate::config::Mode::Buffered => {
            count_buffered(path).map_err(|source| crate::errors::CountError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        crate::config::Mode::Mapped => count_mapped(path)?,
    };

    Ok(Report {
        mode,
        path: path.to_path_buf(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::io::Write;

    fn fixture(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write fixture");
        file.flush().expect("Failed to flush fixture");
        file
    }

    #[test]
    fn test_both_modes_agree() {
        let tmp = fixture(b"abc\ndef\n");

        assert_eq!(count_buffered(tmp.path()).expect("Failed to count buffered"), 2);
        assert_eq!(count_mapped(tmp.path()).expect("Failed to count mapped"), 2);
    }

    #[test]
    fn test_large_file_crosses_buffer_boundaries() {
        // BufReader's default capacity is 8 KiB; make sure chunks split lines
        let line = b"the quick brown fox jumps over the lazy dog\n";
        let content: Vec<u8> = line.iter().copied().cycle().take(line.len() * 5000).collect();
        let tmp = fixture(&content);

        assert_eq!(count_buffered(tmp.path()).expect("Failed to count buffered"), 5000);
        assert_eq!(count_mapped(tmp.path()).expect("Failed to count mapped"), 5000);
    }

    #[test]
    fn test_no_trailing_newline() {
        let tmp = fixture(b"one\ntwo");

        assert_eq!(count_buffered(tmp.path()).expect("Failed to count buffered"), 1);
        assert_eq!(count_mapped(tmp.path()).expect("Failed to count mapped"), 1);
    }

    #[test]
    fn test_empty_file() {
        let tmp = fixture(b"");

        assert_eq!(count_buffered(tmp.path()).expect("Failed to count buffered"), 0);
        assert!(matches!(
            count_mapped(tmp.path()),
            Err(mapping::MapError::MapFailed { .. })
        ));
    }

    #[test]
    fn test_count_builds_report() {
        let tmp = fixture(b"a\nb\nc\n");

        let report = count(Mode::Mapped, tmp.path()).expect("Failed to count");
        assert_eq!(report.lines, 3);
        assert_eq!(report.mode, Mode::Mapped);
        assert_eq!(report.path, tmp.path());
        assert_eq!(
            report.to_string(),
            format!("[m]        3 {}", tmp.path().display())
        );
    }

    #[test]
    fn test_count_missing_file_names_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.txt");

        let err = count(Mode::Buffered, &missing).expect_err("Missing file should fail");
        assert!(matches!(err, crate::errors::CountError::Io { .. }));
        assert_eq!(err.path(), missing.as_path());

        let err = count(Mode::Mapped, &missing).expect_err("Missing file should fail");
        assert!(matches!(
            err,
            crate::errors::CountError::Map(mapping::MapError::OpenFailed { .. })
        ));
        assert!(err.to_string().contains("nope.txt"));
    }
}
