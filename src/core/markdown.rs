//! Markdown to HTML conversion
//!
//! Wraps comrak with CommonMark plus the usual extensions.

use comrak::{Options, markdown_to_html};

/// comrak release this crate is built against; keep in step with Cargo.toml
pub const COMRAK_VERSION: &str = "0.29";

/// Markdown renderer with a fixed set of extensions
pub struct MarkdownRenderer {
    options: Options<'static>,
}

impl MarkdownRenderer {
    /// Create a renderer with tables, strikethrough, autolinks and
    /// description lists enabled
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.description_lists = true;
        // documents are local, trusted files: inline HTML passes through
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Convert Markdown source into an HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
