use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use profilestats::{run, Config, GitHubClient, OutputPaths, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "profilestats")]
#[command(version = "0.1.0")]
#[command(about = "Render GitHub profile statistics into an SVG card and a README section")]
struct Args {
    /// GitHub username to summarize
    #[arg(short, long, env = "GITHUB_USERNAME", default_value = "alade-01")]
    username: String,

    /// Document that receives the generated summary block
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// Output path of the rendered SVG card
    #[arg(long, default_value = "github_profile.svg")]
    svg: PathBuf,

    /// Where the downloaded avatar is cached
    #[arg(long, default_value = "avatar.png")]
    avatar: PathBuf,

    /// Hide the per-repository progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("profilestats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let paths = OutputPaths {
        readme: args.readme.clone(),
        svg: args.svg.clone(),
        avatar: args.avatar.clone(),
    };
    let config = Config::from_env(&args.username, paths);

    match run(config, GitHubClient::new, !args.no_progress).await? {
        RunOutcome::Completed(report) => {
            tracing::info!("Summary for {} written", report.username);
        }
        RunOutcome::Aborted(e) => {
            println!("Error: {}", e);
        }
    }

    Ok(())
}
