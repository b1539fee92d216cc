//! Error types for the converter
//!
//! Every failure carries the path it happened on and, for I/O, the
//! underlying source error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for template lookup and document compilation
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The template storage directory could not be created
    #[error("cannot create template directory {path}")]
    StorageDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template storage directory could not be listed
    #[error("cannot read template directory {path}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No template with the requested name exists
    #[error("template not found: {name} (looked in {dir})")]
    TemplateNotFound { name: String, dir: PathBuf },

    /// The Markdown document could not be read
    #[error("cannot read document {path}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template file could not be read
    #[error("cannot read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template could not be rendered, usually a syntax error
    #[error("cannot render template {path}")]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The generated HTML could not be written
    #[error("cannot write {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ConvertError {
    pub fn storage_dir<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::StorageDir {
            path: path.into(),
            source,
        }
    }

    pub fn storage_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::StorageRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new not-found error for a template name
    pub fn template_not_found<P: Into<PathBuf>>(name: impl Into<String>, dir: P) -> Self {
        Self::TemplateNotFound {
            name: name.into(),
            dir: dir.into(),
        }
    }

    pub fn document_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::DocumentRead {
            path: path.into(),
            source,
        }
    }

    pub fn template_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    pub fn template_render<P: Into<PathBuf>>(path: P, source: handlebars::RenderError) -> Self {
        Self::TemplateRender {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn output_write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error concerns a missing template
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;
