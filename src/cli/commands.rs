//! Command implementations for the CLI

use crate::{
    cli::Args,
    config::{Config, TemplateDirResolver},
    core::{Compiler, TemplateStore},
};
use anyhow::{Context, bail};
use clap::CommandFactory;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

/// Outcome of compiling the documents of one invocation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Output files written, in input order
    pub compiled: Vec<PathBuf>,
    /// Documents that failed to compile
    pub failed: Vec<PathBuf>,
}

impl RunSummary {
    /// Whether every requested document compiled
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn failures into an error for the process exit status
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.is_success() {
            return Ok(());
        }
        bail!(
            "{} of {} document(s) failed to compile",
            self.failed.len(),
            self.failed.len() + self.compiled.len()
        )
    }
}

/// Execute an invocation: optionally list templates, then compile every document
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    if !config.has_work() {
        let usage = Args::command().render_help();
        eprintln!("{usage}");
        bail!("no input files given");
    }

    let resolver = TemplateDirResolver::from_env();
    let store = TemplateStore::open(&resolver).context("Failed to prepare template directory")?;

    if config.list {
        execute_list_command(&store)?;
    }

    if config.documents.is_empty() {
        return Ok(());
    }

    compile_documents(config, &store)?.into_result()
}

/// Print every template name on its own line
#[instrument(skip(store))]
fn execute_list_command(store: &TemplateStore) -> anyhow::Result<()> {
    let names = store.list().context("Failed to list templates")?;

    let mut stdout = std::io::stdout().lock();
    for name in &names {
        writeln!(stdout, "{name}").context("Failed to write template list")?;
    }

    debug!("Listed {} templates from {}", names.len(), store.dir().display());
    Ok(())
}

/// Compile each document in order, continuing past failures
#[instrument(skip(config, store))]
pub fn compile_documents(config: &Config, store: &TemplateStore) -> anyhow::Result<RunSummary> {
    let template = match store.resolve(&config.template_name) {
        Ok(path) => path,
        Err(e) => {
            if e.is_not_found() {
                if let Ok(names) = store.list() {
                    warn!("Available templates: {}", available(&names));
                }
            }
            return Err(anyhow::Error::new(e).context("Failed to resolve template"));
        }
    };
    info!("Using template: {}", template.display());

    let compiler = Compiler::new();
    let mut summary = RunSummary::default();

    for document in &config.documents {
        match compiler.compile(document, &template) {
            Ok(output) => summary.compiled.push(output),
            Err(e) => {
                error!("{}: {:#}", document.display(), anyhow::Error::new(e));
                summary.failed.push(document.clone());
            }
        }
    }

    info!(
        "Compiled {} of {} document(s)",
        summary.compiled.len(),
        config.documents.len()
    );
    Ok(summary)
}

/// Human-readable list of template names
fn available(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(documents: Vec<PathBuf>, template_name: &str) -> Config {
        Config {
            template_name: template_name.to_string(),
            documents,
            ..Config::default()
        }
    }

    #[test]
    fn test_compile_documents_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::at(temp_dir.path());
        fs::write(temp_dir.path().join("default.html"), "<body>{{content}}</body>").unwrap();

        let good = temp_dir.path().join("good.md");
        let missing = temp_dir.path().join("missing.md");
        let second = temp_dir.path().join("second.md");
        fs::write(&good, "# Good").unwrap();
        fs::write(&second, "second").unwrap();

        let config = config_for(vec![good, missing.clone(), second], "default");
        let summary = compile_documents(&config, &store).unwrap();

        assert_eq!(
            summary.compiled,
            vec![
                temp_dir.path().join("good.html"),
                temp_dir.path().join("second.html")
            ]
        );
        assert_eq!(summary.failed, vec![missing]);
        assert!(!summary.is_success());
        assert!(summary.into_result().is_err());
    }

    #[test]
    fn test_compile_documents_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::at(temp_dir.path());
        let document = temp_dir.path().join("a.md");
        fs::write(&document, "# Hi").unwrap();

        let config = config_for(vec![document], "nope");
        let err = compile_documents(&config, &store).unwrap_err();

        assert!(format!("{err:#}").contains("template not found: nope"));
        assert!(!temp_dir.path().join("a.html").exists());
    }

    #[test]
    fn test_available_names() {
        assert_eq!(available(&[]), "none");
        assert_eq!(
            available(&["blog".to_string(), "default".to_string()]),
            "blog, default"
        );
    }

    #[test]
    fn test_compile_documents_output_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::at(temp_dir.path());
        fs::write(temp_dir.path().join("default.html"), "{{content}}").unwrap();

        let blocked = temp_dir.path().join("blocked.md");
        let fine = temp_dir.path().join("fine.md");
        fs::write(&blocked, "x").unwrap();
        fs::write(&fine, "y").unwrap();
        fs::create_dir(temp_dir.path().join("blocked.html")).unwrap();

        let config = config_for(vec![blocked.clone(), fine], "default");
        let summary = compile_documents(&config, &store).unwrap();

        assert_eq!(summary.compiled, vec![temp_dir.path().join("fine.html")]);
        assert_eq!(summary.failed, vec![blocked]);
    }

    #[test]
    fn test_summary_success() {
        let summary = RunSummary {
            compiled: vec![PathBuf::from("a.html")],
            failed: vec![],
        };
        assert!(summary.is_success());
        assert!(summary.into_result().is_ok());
    }

    #[test]
    fn test_nothing_to_do_is_an_error() {
        assert!(execute_command(&Config::default()).is_err());
    }
}
