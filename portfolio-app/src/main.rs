mod args;

use crate::args::{Args, Command};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::Level;
use portfolio_lib::{Project, ProjectCatalog, RepositoryFetcher, SLIDER_AUTOPLAY};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match args.command {
        Command::Projects {
            account,
            github_token,
            api_url,
            revalidate_secs,
            json,
        } => {
            let credential = github_token.filter(|t| !t.is_empty());
            let fetcher = RepositoryFetcher::new(api_url, credential.as_deref())?
                .with_revalidate(Duration::from_secs(revalidate_secs))
                .with_log_level(Level::Info);
            let projects = fetcher.fetch_projects(&account).await;
            show(&projects, json)?;
        }
        Command::Catalog { featured, json } => {
            let catalog = ProjectCatalog::curated();
            if featured {
                if !json {
                    println!("(slider autoplay every {}s)", SLIDER_AUTOPLAY.as_secs());
                }
                show(catalog.featured(), json)?;
            } else {
                show(catalog.all(), json)?;
            }
        }
    }

    Ok(())
}

fn show(projects: &[Project], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects to display");
        return Ok(());
    }

    for project in projects {
        println!("{} ({})", project.title.yellow().bold(), project.id);
        println!("  {}", project.description);
        if !project.technologies.is_empty() {
            println!("  [{}]", project.technologies.join("] [").cyan());
        }
        println!("  image: {}", project.image);
        println!("  code:  {}", project.github);
        if project.has_demo() {
            println!("  demo:  {}", project.demo_link());
        }
        println!();
    }

    println!("({} projects)", projects.len());

    Ok(())
}
