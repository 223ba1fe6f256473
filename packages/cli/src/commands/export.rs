use super::read_project;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_page, CompileOptions as HtmlOptions};
use pagecraft_compiler_react::{compile_to_react, CompileOptions as ReactOptions};
use pagecraft_compiler_vue::{compile_to_vue, CompileOptions as VueOptions};
use pagecraft_model::{ExportTarget, Project};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project file to export
    pub project: PathBuf,

    /// Target format (html, react, vue); repeatable, defaults to the config targets
    #[arg(short, long)]
    pub target: Vec<ExportTarget>,

    /// Page id or name (defaults to the current page)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Indent the HTML body (overrides config)
    #[arg(long)]
    pub pretty: bool,
}

/// Compile one page of `project` to `target`
pub fn export_target(
    project: &Project,
    page: Option<&str>,
    target: ExportTarget,
    pretty: bool,
) -> Result<String> {
    let page = match page {
        Some(id_or_name) => project
            .find_page(id_or_name)
            .ok_or_else(|| anyhow!("Page not found: {}", id_or_name))?,
        None => project
            .current_page()
            .ok_or_else(|| anyhow!("Project has no pages"))?,
    };

    let output = match target {
        ExportTarget::Html => {
            let options = HtmlOptions {
                pretty,
                ..HtmlOptions::default()
            };
            compile_page(project, Some(&page.id), options)?
        }
        ExportTarget::React => {
            let options = ReactOptions {
                component_name: page.name.clone(),
            };
            compile_to_react(&page.components, options)
        }
        ExportTarget::Vue => compile_to_vue(&page.components, VueOptions::default()),
    };
    Ok(output)
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let project = read_project(&cwd.join(&args.project))?;

    let targets = if args.target.is_empty() {
        config.targets.clone()
    } else {
        args.target.clone()
    };
    let pretty = args.pretty || config.pretty;
    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.get_out_dir(cwd),
    };

    if !args.stdout {
        println!(
            "{} {}",
            "🔨 Exporting".bright_blue().bold(),
            project.name.bright_white()
        );
    }

    for target in targets {
        let output = export_target(&project, args.page.as_deref(), target, pretty)?;

        if args.stdout {
            println!("{}", output);
            continue;
        }

        fs::create_dir_all(&out_dir)?;
        let output_file = out_dir.join(target.filename());
        fs::write(&output_file, &output)?;
        println!(
            "  {} {} → {} ({} bytes)",
            "✓".green(),
            target,
            output_file.display(),
            output.len()
        );
    }

    if !args.stdout {
        println!();
        println!("{}", "✅ Export complete".green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::create_project;
    use crate::commands::write_project;

    #[test]
    fn test_export_target_per_format() {
        let project = create_project("Site", Some("card-template")).unwrap();

        let html = export_target(&project, None, ExportTarget::Html, false).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"card\""));

        let react = export_target(&project, Some("home"), ExportTarget::React, false).unwrap();
        assert!(react.contains("export default function Home() {"));

        let vue = export_target(&project, None, ExportTarget::Vue, false).unwrap();
        assert!(vue.starts_with("<template>"));

        assert!(export_target(&project, Some("missing"), ExportTarget::Html, false).is_err());
    }

    #[test]
    fn test_export_writes_fixed_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let project = create_project("Site", Some("navigation-bar")).unwrap();
        write_project(&dir.path().join("site.json"), &project).unwrap();

        let args = ExportArgs {
            project: PathBuf::from("site.json"),
            target: vec![ExportTarget::Html, ExportTarget::React, ExportTarget::Vue],
            page: None,
            out_dir: Some("out".to_string()),
            stdout: false,
            pretty: true,
        };
        export(args, dir.path()).unwrap();

        let out = dir.path().join("out");
        for target in ExportTarget::ALL {
            assert!(out.join(target.filename()).exists(), "{} missing", target);
        }
        let html = fs::read_to_string(out.join("website.html")).unwrap();
        assert!(html.contains("<nav"));
    }
}
