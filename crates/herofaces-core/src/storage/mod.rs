//! File lifecycle: atomic finalize (write `.part`, then rename to the final name).
//!
//! The planner treats any existing file as downloaded and `sync` replaces
//! dataset files in place, so a half-written file must never appear under
//! its final name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `Roy.webp` → `Roy.webp.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `bytes` to `final_path` via its temp path, creating parent
/// directories as needed. An existing file is replaced.
pub fn write_atomic(final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = temp_path(final_path);
    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("faces/Roy.webp"));
        assert_eq!(p.to_string_lossy(), "faces/Roy.webp.part");
        let p2 = temp_path(Path::new("/tmp/fullunits.json"));
        assert_eq!(p2.to_string_lossy(), "/tmp/fullunits.json.part");
    }

    #[test]
    fn write_creates_dirs_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img").join("faces").join("Roy.webp");
        write_atomic(&path, b"RIFF").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"RIFF");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A B.webp");
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn unwritable_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        assert!(write_atomic(&blocker.join("Roy.webp"), b"x").is_err());
    }
}
