//! File system utility functions
//!
//! Thin, logged wrappers over `std::fs` used by the template store and
//! the compiler.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Regular files directly inside `dir` whose extension is exactly `extension`
    #[instrument(skip(self))]
    pub fn files_with_extension<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        dir: P,
        extension: &str,
    ) -> io::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();

        let pattern = glob::Pattern::new(&format!("*.{}", glob::Pattern::escape(extension)))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error reading entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            // names that are not valid UTF-8 never match
            if !pattern.matches_path(Path::new(&entry.file_name())) {
                continue;
            }
            if path.is_file() {
                files.push(path);
            } else {
                debug!("Skipping non-file entry: {}", path.display());
            }
        }
        files.sort();

        debug!("Found {} *.{} files in {}", files.len(), extension, dir.display());
        Ok(files)
    }

    /// Write content to a file, creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }

    /// Read file contents as raw bytes
    #[instrument(skip(self))]
    pub fn read_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<Vec<u8>> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read(path)
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
