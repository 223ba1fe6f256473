pub mod export;
pub mod init;
pub mod seo;
pub mod templates;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use seo::{seo, SeoArgs};
pub use templates::{templates, TemplatesArgs};

use anyhow::{Context, Result};
use pagecraft_model::Project;
use std::fs;
use std::path::Path;

/// File name `pagecraft init` writes the project to
pub const DEFAULT_PROJECT_NAME: &str = "project.json";

pub fn read_project(path: &Path) -> Result<Project> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Cannot read project file {}", path.display()))?;
    let project = serde_json::from_str(&source)
        .with_context(|| format!("Invalid project file {}", path.display()))?;
    Ok(project)
}

pub fn write_project(path: &Path, project: &Project) -> Result<()> {
    let json = serde_json::to_string_pretty(project)?;
    fs::write(path, json)?;
    Ok(())
}
