//! Configuration management for the converter
//!
//! Collects the options of one invocation and resolves where templates live.

use crate::{cli::Args, error::ConvertError, utils::env::EnvUtils};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Program name, also the storage subdirectory under the data home
pub const APP_NAME: &str = "cmark2html";

/// Template used when `--template` is not given
pub const DEFAULT_TEMPLATE: &str = "default";

/// Variable that points straight at the template directory
pub const TEMPLATE_DIR_VAR: &str = "CMARK2HTML_TEMPLATE_DIR";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Name of the template to render documents into
    pub template_name: String,
    /// Print available templates before compiling
    pub list: bool,
    /// Markdown documents to compile, in order
    pub documents: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            template_name: DEFAULT_TEMPLATE.to_string(),
            list: false,
            documents: Vec::new(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ConvertError> {
        let config = Self {
            debug: args.debug,
            template_name: args.template.clone(),
            list: args.list,
            documents: args.files.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.template_name.trim().is_empty() {
            return Err(ConvertError::validation("template name must not be empty"));
        }

        Ok(())
    }

    /// Whether the invocation has anything to do at all
    pub fn has_work(&self) -> bool {
        self.list || !self.documents.is_empty()
    }
}

/// Works out the template storage directory from a few environment variables.
///
/// Precedence: `CMARK2HTML_TEMPLATE_DIR`, `$XDG_DATA_HOME/cmark2html`,
/// `$HOME/.local/share/cmark2html`, then the platform home directory.
pub struct TemplateDirResolver<F> {
    lookup: F,
}

impl TemplateDirResolver<fn(&str) -> Option<String>> {
    /// Resolver over the real process environment
    pub fn from_env() -> Self {
        Self {
            lookup: EnvUtils::get_non_empty,
        }
    }
}

impl<F> TemplateDirResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Resolver over an arbitrary variable lookup
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.is_empty())
    }

    /// Resolve the directory without touching the filesystem
    pub fn resolve(&self) -> Result<PathBuf, ConvertError> {
        if let Some(dir) = self.var(TEMPLATE_DIR_VAR) {
            return Ok(PathBuf::from(dir));
        }

        if let Some(data_home) = self.var("XDG_DATA_HOME") {
            return Ok(PathBuf::from(data_home).join(APP_NAME));
        }

        let home = self
            .var("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                ConvertError::config(format!(
                    "cannot locate the template directory: set {TEMPLATE_DIR_VAR}, XDG_DATA_HOME or HOME"
                ))
            })?;

        Ok(home.join(".local").join("share").join(APP_NAME))
    }
}
