use super::{write_project, DEFAULT_PROJECT_NAME};
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::open_store;
use pagecraft_model::{instantiate_template, Project};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name
    #[arg(short, long, default_value = "My Website")]
    pub name: String,

    /// Seed the home page with a built-in template (see `pagecraft templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Force overwrite existing config and project files
    #[arg(short, long)]
    pub force: bool,
}

/// New project, its home page optionally seeded from a template
pub fn create_project(name: &str, template: Option<&str>) -> Result<Project> {
    let mut project = Project::new(name);

    if let Some(template_id) = template {
        let component = instantiate_template(template_id)
            .ok_or_else(|| anyhow!("Unknown template: {}", template_id))?;
        let home = project.current_page_id.clone();
        project.set_page_components(&home, vec![component])?;
    }

    Ok(project)
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    println!("{}", "📝 Initializing Pagecraft project...".bright_blue().bold());

    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    if config_path.exists() && !args.force {
        println!("  {} {} already exists", "•".yellow(), DEFAULT_CONFIG_NAME);
    } else {
        let config_json = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&config_path, config_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    let project_path = cwd.join(DEFAULT_PROJECT_NAME);
    if project_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_PROJECT_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let project = create_project(&args.name, args.template.as_deref())?;
    write_project(&project_path, &project)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_PROJECT_NAME);

    let config = Config::load(cwd)?;
    let mut store = open_store(&config.storage_in(cwd));
    store.save(&project)?;
    debug!(project_id = %project.id, "project saved to store");

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} in the editor", DEFAULT_PROJECT_NAME);
    println!("  2. Run: pagecraft export {}", DEFAULT_PROJECT_NAME);
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
