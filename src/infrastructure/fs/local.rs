//! Local file system implementation
//!
//! Small wrapper around std::fs with atomic writes: content lands in a
//! temporary file next to the destination and is renamed into place, so
//! a crash never leaves a half-written document behind.

use std::io::Write;
use std::path::Path;

/// Local file system access with atomic writes
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Read file content as a string
    pub fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Write content atomically, creating parent directories as needed
    pub fn write(&self, path: &Path, content: &str) -> std::io::Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Check if a path exists
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Remove a file
    pub fn remove(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_and_read_roundtrip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.json");
        let fs = LocalFs::new();

        fs.write(&file, "{\"key_0\":{}}").unwrap();
        assert_eq!(fs.read(&file).unwrap(), "{\"key_0\":{}}");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("dir").join("test.json");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.json");
        let fs = LocalFs::new();

        fs.write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();
        assert_eq!(fs.read(&file).unwrap(), "new");
    }

    #[test]
    fn remove_deletes_the_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.json");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();
        assert!(fs.exists(&file));
        fs.remove(&file).unwrap();
        assert!(!fs.exists(&file));
    }
}
