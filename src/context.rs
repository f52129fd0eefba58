use crate::error::Error;
use crate::manifest::MANIFEST_FILE;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing global configuration
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (list files as they are added to the archive)
    pub verbose: bool,

    /// Path to the module.json manifest
    pub manifest_path: PathBuf,

    /// Base directory (directory containing module.json); source files are
    /// read and the packages directory is created relative to it
    pub base_dir: PathBuf,
}

impl Context {
    /// Locate module.json at the given path (a directory containing it, or
    /// the manifest file itself) and build the context around it. With no
    /// path, the manifest is looked up in the current working directory and
    /// all paths stay relative.
    pub fn locate(path: Option<&Path>, verbose: bool) -> Result<Self> {
        let base_path = match path {
            Some(p) => p.to_path_buf(),
            // Empty path keeps lookups relative to the working directory
            None => PathBuf::new(),
        };

        let manifest_path = if base_path.is_file() {
            base_path
        } else {
            base_path.join(MANIFEST_FILE)
        };

        if !manifest_path.exists() {
            return Err(Error::ManifestNotFound(
                manifest_path.display().to_string(),
            ));
        }

        let base_dir = manifest_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(PathBuf::new);

        Ok(Self {
            verbose,
            manifest_path,
            base_dir,
        })
    }
}
