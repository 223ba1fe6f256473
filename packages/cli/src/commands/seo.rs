use super::read_project;
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use pagecraft_compiler_html::{analyze, robots_txt, schema_markup, sitemap_xml, SchemaData};
use pagecraft_model::Project;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SeoArgs {
    /// Project file
    pub project: PathBuf,

    /// Site URL (overrides config `baseUrl`)
    #[arg(short, long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub artifact: SeoArtifact,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum SeoArtifact {
    /// Print sitemap.xml
    Sitemap,
    /// Print robots.txt
    Robots,
    /// Print schema.org JSON-LD for the project
    Schema,
    /// Report missing or weak meta data
    Analyze,
}

/// Text of one artifact. `Analyze` is rendered as a plain report.
pub fn render(project: &Project, artifact: SeoArtifact, url: &str) -> String {
    match artifact {
        SeoArtifact::Sitemap => sitemap_xml(project, url),
        SeoArtifact::Robots => robots_txt(url),
        SeoArtifact::Schema => schema_markup(&SchemaData::from_project(project, Some(url))),
        SeoArtifact::Analyze => {
            let report = analyze(project, Some(url));
            if report.is_clean() {
                return format!("{}\n", "✅ No SEO issues found".green());
            }

            let mut out = String::new();
            for issue in &report.issues {
                out.push_str(&format!("  {} {}\n", "✗".red(), issue));
            }
            for suggestion in &report.suggestions {
                out.push_str(&format!("  {} {}\n", "•".yellow(), suggestion));
            }
            out
        }
    }
}

pub fn seo(args: SeoArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let project = read_project(&cwd.join(&args.project))?;
    let url = args.url.unwrap_or(config.base_url);

    print!("{}", render(&project, args.artifact, &url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::ProjectSettings;

    #[test]
    fn test_render_artifacts() {
        let project = Project::new("Acme");

        let sitemap = render(&project, SeoArtifact::Sitemap, "https://acme.test");
        assert!(sitemap.contains("<loc>https://acme.test/home</loc>"));

        let robots = render(&project, SeoArtifact::Robots, "https://acme.test/");
        assert!(robots.contains("Sitemap: https://acme.test/sitemap.xml"));

        let schema = render(&project, SeoArtifact::Schema, "https://acme.test");
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["url"], "https://acme.test");
    }

    #[test]
    fn test_render_analysis() {
        colored::control::set_override(false);

        let mut project = Project::new("Acme");
        let report = render(&project, SeoArtifact::Analyze, "https://acme.test");
        assert!(report.contains("✗ Missing site title"));

        project.set_settings(ProjectSettings {
            site_title: Some("Acme".to_string()),
            site_description: Some("x".repeat(150)),
            favicon: Some("/favicon.ico".to_string()),
            ..Default::default()
        });
        let report = render(&project, SeoArtifact::Analyze, "https://acme.test");
        assert!(report.contains("No SEO issues found"));
    }
}
