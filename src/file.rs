//! Reading and writing documents on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::UnstyleError;

/// Read a whole document as UTF-8 text.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, UnstyleError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| UnstyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Overwrite `path` with `text`.
pub fn write_document(path: impl AsRef<Path>, text: &str) -> Result<(), UnstyleError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| UnstyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.svg");
        let err = read_document(&path).unwrap_err();
        match &err {
            UnstyleError::Io { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("missing.svg"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.svg");
        fs::write(&path, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();
        let err = read_document(&path).unwrap_err();
        assert!(matches!(
            err,
            UnstyleError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::InvalidData
        ));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        write_document(&path, "<svg>a much longer document</svg>").unwrap();
        write_document(&path, "<svg/>").unwrap();
        assert_eq!(read_document(&path).unwrap(), "<svg/>");
    }
}
