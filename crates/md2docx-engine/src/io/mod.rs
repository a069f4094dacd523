use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Read a markdown source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the finished document. An error here invalidates the whole run; no
/// partial output file is considered usable.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ConvertError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_source_returns_file_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Title\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn read_source_missing_file_is_fatal() {
        let result = read_source(Path::new("/no/such/file.md"));
        assert!(matches!(result, Err(ConvertError::ReadSource { .. })));
    }

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/doc.docx");

        write_output(&path, b"PK").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"PK");
    }
}
