use clap::{Parser, Subcommand};
use portfolio_lib::GITHUB_API_URL;

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(
        short = 'v',
        long = "verbose",
        help = "Log outgoing requests",
        global = true
    )]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(about = "Fetch an account's repositories and show them as project cards")]
    Projects {
        #[clap(help = "GitHub account name")]
        account: String,

        #[clap(
            short = 't',
            long = "token",
            help = "GitHub REST API token",
            env = "GITHUB_TOKEN",
            hide_env_values = true
        )]
        github_token: Option<String>,

        #[clap(long = "api-url", help = "GitHub REST API base URL", default_value = GITHUB_API_URL)]
        api_url: String,

        #[clap(
            long = "revalidate-secs",
            help = "Seconds a fetched listing stays fresh",
            default_value = "3600"
        )]
        revalidate_secs: u64,

        #[clap(long = "json", help = "Print JSON instead of cards")]
        json: bool,
    },

    #[clap(about = "Show the curated project catalog")]
    Catalog {
        #[clap(long = "featured", help = "Only the projects shown in the slider")]
        featured: bool,

        #[clap(long = "json", help = "Print JSON instead of cards")]
        json: bool,
    },
}
