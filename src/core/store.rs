//! Template storage
//!
//! Templates are `*.html` files directly inside a per-user directory; a
//! template's name is its file name without the extension.

use crate::{
    config::TemplateDirResolver,
    error::{ConvertError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File extension that marks a template
pub const TEMPLATE_EXTENSION: &str = "html";

/// Read-only view over the template storage directory
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    fs_utils: FileSystemUtils,
}

/// Compute the storage directory and create it if it does not exist yet
#[instrument(skip(resolver))]
pub fn ensure_storage_directory<F>(resolver: &TemplateDirResolver<F>) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let dir = resolver.resolve()?;
    let fs_utils = FileSystemUtils::new();

    if !fs_utils.is_dir(&dir) {
        info!("Creating template directory: {}", dir.display());
        fs_utils
            .create_dir_all(&dir)
            .map_err(|e| ConvertError::storage_dir(&dir, e))?;
    }

    debug!("Template directory: {}", dir.display());
    Ok(dir)
}

impl TemplateStore {
    /// Open the store at the resolved storage directory, creating it if needed
    pub fn open<F>(resolver: &TemplateDirResolver<F>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self::at(ensure_storage_directory(resolver)?))
    }

    /// Store over an existing directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all available templates, sorted
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .entries()?
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        names.sort();
        names.dedup();

        debug!("Found {} templates", names.len());
        Ok(names)
    }

    /// Full path of the template called `name`
    #[instrument(skip(self))]
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = self
            .entries()?
            .into_iter()
            .find_map(|(candidate, path)| (candidate == name).then_some(path))
            .ok_or_else(|| ConvertError::template_not_found(name, &self.dir))?;

        debug!("Resolved template {} to {}", name, path.display());
        Ok(path)
    }

    /// Every template in the directory with its name
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        let files = self
            .fs_utils
            .files_with_extension(&self.dir, TEMPLATE_EXTENSION)
            .map_err(|e| ConvertError::storage_read(&self.dir, e))?;

        Ok(files
            .into_iter()
            .filter_map(|path| template_name(&path).map(|name| (name, path)))
            .collect())
    }
}

/// Template name for a path, if it is a `.html` file
fn template_name(path: &Path) -> Option<String> {
    if path.extension()? != TEMPLATE_EXTENSION {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
