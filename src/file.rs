use std::fs;
use std::io;
use std::path::Path;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path the content was read from
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Error types for file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in file: {path}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Hex-encoded BLAKE3 digest of `content`
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Read a file from disk with UTF-8 validation
///
/// # Returns
/// * `Ok(FileContent)` - File content with metadata
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();

    let bytes = fs::read(path_ref).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound {
            path: path_str.clone(),
        },
        _ => FileError::Read {
            path: path_str.clone(),
            source,
        },
    })?;

    let content = String::from_utf8(bytes).map_err(|source| FileError::InvalidUtf8 {
        path: path_str.clone(),
        source,
    })?;

    tracing::debug!(path = %path_str, bytes = content.len(), "read file");

    Ok(FileContent {
        path: path_str,
        len: content.len(),
        checksum: checksum(&content),
        content,
    })
}

/// Overwrite the file at `path` with `content` in full
///
/// Truncates and rewrites even when the content is unchanged. A failure
/// part-way may leave the file truncated.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
    let path_ref = path.as_ref();

    fs::write(path_ref, content.as_bytes()).map_err(|source| FileError::Write {
        path: path_ref.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_file_valid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("valid.js");
        let content = "const greeting = `héllo`;\n";

        fs::write(&file_path, content.as_bytes()).unwrap();

        let file_content = read_file(&file_path).unwrap();

        assert_eq!(file_content.content, content);
        assert_eq!(file_content.len, content.len());
        assert_eq!(file_content.path, file_path.display().to_string());
        assert_eq!(file_content.checksum, checksum(content));
        assert!(file_content.checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_read_file_with_debug_logging() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("logged.js");
        fs::write(&file_path, "x").unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let file_content =
            tracing::subscriber::with_default(subscriber, || read_file(&file_path)).unwrap();

        assert_eq!(file_content.path, file_path.display().to_string());
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("invalid.js");
        fs::write(&file_path, [0xFF, 0xFE, 0xFD]).unwrap();

        match read_file(&file_path) {
            Err(FileError::InvalidUtf8 { path, .. }) => {
                assert_eq!(path, file_path.display().to_string());
            }
            other => panic!("Expected FileError::InvalidUtf8, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_not_found() {
        let file_path = PathBuf::from("/nonexistent/path/that/does/not/exist.js");

        match read_file(&file_path) {
            Err(FileError::NotFound { path }) => assert!(path.contains("nonexistent")),
            other => panic!("Expected FileError::NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(read_file(dir.path()), Err(FileError::Read { .. })));
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("out.js");
        fs::write(&file_path, "a much longer original body").unwrap();

        write_file(&file_path, "short").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_write_file_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("missing").join("out.js");

        assert!(matches!(
            write_file(&file_path, "x"),
            Err(FileError::Write { .. })
        ));
    }

    #[test]
    fn test_checksum_differs_on_change() {
        assert_ne!(checksum("`a`"), checksum("\\`a\\`"));
        assert_eq!(checksum("same"), checksum("same"));
    }
}
