//! Output file writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Create or truncate `path` and write `text` to it as UTF-8.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let wrap = |source: std::io::Error| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_output() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");
        write_output(&path, "one\ntwo\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_write_output_truncates() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content\n").unwrap();
        write_output(&path, "x\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("out.txt");
        let err = write_output(&path, "x").unwrap_err();
        assert!(matches!(err, ExtractError::OutputWrite { .. }));
    }
}
