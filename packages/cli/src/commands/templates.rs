use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_model::{count_nodes, templates_by_category};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print the gallery as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    let groups = templates_by_category();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("{}", "🧩 Templates".bright_blue().bold());
    for (category, templates) in groups {
        println!();
        println!("{}", category.bold());
        for template in templates {
            let nodes = count_nodes(std::slice::from_ref(&template.component));
            println!(
                "  {} {} ({} components)",
                template.id.cyan(),
                template.name,
                nodes
            );
            println!("    {}", template.description.dimmed());
        }
    }
    println!();
    println!("Use one with: pagecraft init --template <ID>");

    Ok(())
}
