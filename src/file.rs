// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

/// Create `dir` (and parents) unless it already exists.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Make sure the directory that will hold `path` exists.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Overwrite `path` with `text`, creating parent directories as needed.
pub fn write_text(path: &Path, text: &str) -> io::Result<()> {
    ensure_parent(path)?;
    fs::write(path, text)
}

/// Contents of `path`, or `None` if there is no such file.
pub fn read_if_present(path: &Path) -> io::Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_text_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("a/b/report.md");
        write_text(&p, "one").unwrap();
        write_text(&p, "two").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "two");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("plain");
        fs::write(&p, "x").unwrap();
        assert!(ensure_directory(&p).is_err());
    }

    #[test]
    fn read_if_present_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_if_present(&dir.path().join("nope.html")).unwrap().is_none());
    }

    #[test]
    fn read_if_present_surfaces_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("backup.html");
        fs::write(&p, [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(read_if_present(&p).unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
