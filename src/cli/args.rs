//! Command-line argument parsing and validation

use crate::{config::DEFAULT_TEMPLATE, core::markdown::COMRAK_VERSION};
use clap::Parser;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Program and Markdown engine versions
pub static VERSION: LazyLock<String> = LazyLock::new(|| {
    format!("{} - comrak {}", env!("CARGO_PKG_VERSION"), COMRAK_VERSION)
});

/// Render Markdown documents into HTML templates
#[derive(Parser, Debug)]
#[command(author, version = VERSION.as_str(), about, long_about = None)]
#[command(name = "cmark2html")]
pub struct Args {
    /// The input CommonMark file(s)
    #[arg(value_name = "infile.md")]
    pub files: Vec<PathBuf>,

    /// The template to use
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["cmark2html", "a.md"]).unwrap();
        assert!(!args.debug);
        assert!(!args.list);
        assert_eq!(args.template, "default");
        assert_eq!(args.files, vec![PathBuf::from("a.md")]);
    }

    #[test]
    fn test_parse_no_arguments() {
        let args = Args::try_parse_from(["cmark2html"]).unwrap();
        assert!(args.files.is_empty());
        assert!(!args.list);
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["cmark2html", "-l", "-t", "blog", "a.md", "b.md"]).unwrap();
        assert!(args.list);
        assert_eq!(args.template, "blog");
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn test_parse_long_flags() {
        let args =
            Args::try_parse_from(["cmark2html", "--debug", "--list", "--template", "blog"]).unwrap();
        assert!(args.debug);
        assert!(args.list);
        assert_eq!(args.template, "blog");
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_version_mentions_engine() {
        let err = Args::try_parse_from(["cmark2html", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(&format!("comrak {COMRAK_VERSION}")));
        assert!(err.to_string().contains(env!("CARGO_PKG_VERSION")));
    }
}
