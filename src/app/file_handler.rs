//! File-system helpers for writing query results.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `output_path` can receive a result file.
///
/// The path must not be an existing directory, and its parent directory (if
/// any) must exist. Checked before the path-count table is built so a bad path
/// fails fast.
///
/// # Errors
/// Returns `AppError::InvalidPath` describing the problem.
pub fn validate_output_path(output_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if output_path.is_dir() {
        let error_msg = format!("Path is a directory: {}", output_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    let parent_missing = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .is_some_and(|parent| !parent.is_dir());
    if parent_missing {
        let error_msg = format!("Directory does not exist for: {}", output_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    Ok(())
}

/// Writes `content` to `file_path`, creating or truncating it, followed by a newline.
///
/// The writer is flushed before returning so callers see the complete file.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        write_content_to_file(&path, "{\"a\":1}").unwrap();
        write_content_to_file(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn rejects_directories_and_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_output_path(dir.path(), true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_output_path(&dir.path().join("missing").join("out.json"), true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(validate_output_path(&dir.path().join("out.json"), true).is_ok());
        assert!(validate_output_path(Path::new("out.json"), true).is_ok());
    }
}
