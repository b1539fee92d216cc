//! Core functionality for document conversion
//!
//! Contains the template store, the Markdown and template renderers, and
//! the compiler that ties them together.

pub mod compiler;
pub mod markdown;
pub mod store;
pub mod template;

pub use compiler::Compiler;
pub use markdown::MarkdownRenderer;
pub use store::TemplateStore;
pub use template::{RawHtml, TemplateContext, TemplateRenderer};
