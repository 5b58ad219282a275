//! Output path selection and validation
use super::LoggerError;
use std::env;
use std::fs::File;
use std::path::{absolute, Path, PathBuf};

/// Default destination for a logger that was not given an explicit path.
///
/// The file is named after this package. Darwin gets a literal `/tmp` rather
/// than the per-user temp dir the OS would hand out.
pub fn default_log_path(os: &str) -> PathBuf {
    let file_name = concat!(env!("CARGO_PKG_NAME"), ".log");
    if os == "macos" {
        Path::new("/tmp").join(file_name)
    } else {
        env::temp_dir().join(file_name)
    }
}

/// Turn a raw destination string into a validated absolute path.
///
/// The checks are a best-effort pre-flight; a write can still fail later and
/// surfaces as [`LoggerError::Io`].
pub(crate) fn resolve_output_file(value: &str) -> Result<PathBuf, LoggerError> {
    if value == "local" {
        return Ok(Path::new(env!("CARGO_MANIFEST_DIR")).join("output.log"));
    }
    let path = absolute(value)?;
    if path.is_dir() {
        return Err(LoggerError::FileIsADirectory(path));
    }
    let dir = match path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => return Err(LoggerError::ParentDirMissing(path)),
    };
    if !dir.is_dir() {
        return Err(LoggerError::ParentDirMissing(dir));
    }
    if !is_traversable(&dir) {
        return Err(LoggerError::InsufficientPermissions(dir));
    }
    Ok(path)
}

/// Truncate the file at `path` to zero length.
pub(crate) fn clear_file(path: &Path) -> std::io::Result<()> {
    File::create(path)?;
    Ok(())
}

#[cfg(unix)]
fn is_traversable(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn is_traversable(_dir: &Path) -> bool {
    true
}

#[cfg(test)]
mod output_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_log_path_darwin() {
        assert_eq!(
            default_log_path("macos"),
            Path::new("/tmp").join(concat!(env!("CARGO_PKG_NAME"), ".log"))
        );
    }

    #[test]
    fn test_default_log_path_other() {
        let path = default_log_path("linux");
        assert!(path.starts_with(env::temp_dir()));
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            concat!(env!("CARGO_PKG_NAME"), ".log")
        );
    }

    #[test]
    fn test_resolve_relative_becomes_absolute() {
        let resolved = resolve_output_file("relative.log").unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name().unwrap(), "relative.log");
    }

    #[test]
    fn test_resolve_missing_parent() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("nope").join("app.log");
        assert!(matches!(
            resolve_output_file(bad.to_str().unwrap()),
            Err(LoggerError::ParentDirMissing(_))
        ));
    }

    #[test]
    fn test_resolve_directory_target() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            resolve_output_file(dir.path().to_str().unwrap()),
            Err(LoggerError::FileIsADirectory(_))
        ));
    }

    #[test]
    fn test_clear_file_empties_contents() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("stale.log");
        std::fs::write(&target, "stale").unwrap();
        clear_file(&target).unwrap();
        assert_eq!(std::fs::metadata(&target).unwrap().len(), 0);
    }
}
