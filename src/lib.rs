//! # cmark2html
//!
//! Converts Markdown documents into HTML files by rendering them into a
//! named template from a per-user template directory.
//!
//! Templates are `*.html` files in `$CMARK2HTML_TEMPLATE_DIR`,
//! `$XDG_DATA_HOME/cmark2html` or `~/.local/share/cmark2html`, with a
//! `{{content}}` placeholder for the converted document.
//!
//! ## Example
//!
//! ```no_run
//! use cmark2html::core::{Compiler, TemplateStore};
//!
//! let store = TemplateStore::at("/home/me/.local/share/cmark2html");
//! let template = store.resolve("default")?;
//! let output = Compiler::new().compile("notes.md".as_ref(), &template)?;
//! println!("wrote {}", output.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout is reserved for the template listing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
