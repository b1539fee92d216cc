//! Document compilation
//!
//! Reads a Markdown document and a template, renders the document into
//! the template and writes the result next to the document.

use crate::{
    core::{
        markdown::MarkdownRenderer,
        template::{RawHtml, TemplateContext, TemplateRenderer},
    },
    error::{ConvertError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Output extension for compiled documents
pub const OUTPUT_EXTENSION: &str = "html";

/// Compiles Markdown documents into HTML templates
pub struct Compiler {
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
    fs_utils: FileSystemUtils,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            templates: TemplateRenderer::new(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Compile `document` into `template` and return the written output path.
    ///
    /// The output has the document's directory and stem with an `.html`
    /// extension and is overwritten if it exists. A document that would be
    /// its own output is rejected before anything is read.
    #[instrument(skip(self))]
    pub fn compile(&self, document: &Path, template: &Path) -> Result<PathBuf> {
        let output = output_path(document);
        if output == document {
            return Err(ConvertError::validation(format!(
                "{} would overwrite itself; rename it to a non-.html extension",
                document.display()
            )));
        }

        let source = self
            .fs_utils
            .read_file(document)
            .map_err(|e| ConvertError::document_read(document, e))?;
        let template_text = self
            .fs_utils
            .read_file_to_string(template)
            .map_err(|e| ConvertError::template_read(template, e))?;

        let body = self.markdown.render(&String::from_utf8_lossy(&source));
        debug!("Rendered {} bytes of Markdown into {} bytes of HTML", source.len(), body.len());

        let context = TemplateContext::with_content(RawHtml::from(body));
        let html = self
            .templates
            .render(&template_text, &context)
            .map_err(|e| ConvertError::template_render(template, e))?;

        self.fs_utils
            .write_file(&output, html)
            .map_err(|e| ConvertError::output_write(&output, e))?;

        info!("Compiled {} -> {}", document.display(), output.display());
        Ok(output)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Output path for a document: same directory and stem, `.html` extension
pub fn output_path(document: &Path) -> PathBuf {
    document.with_extension(OUTPUT_EXTENSION)
}
