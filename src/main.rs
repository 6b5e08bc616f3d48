mod activity;
mod app;
mod config;
mod console;
mod error;
mod github;
mod members;
mod precheck;
mod report;
#[cfg(test)]
mod test_utils;

use clap::Parser;
use config::Config;
use console::Palette;
use github::client::GitHubClient;

#[derive(Parser)]
#[command(
    name = "org-activity",
    version,
    about = "List the last public GitHub activity of every organization member"
)]
struct Cli {
    #[arg(
        long = "org",
        value_name = "NAME",
        help = "Organization to scan (repeatable, replaces the built-in list)"
    )]
    orgs: Vec<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fail(e: error::ActivityError) -> ! {
    eprintln!("{}", Palette::for_stderr().error(&format!("Error: {e}")));
    std::process::exit(1);
}

// one shared client and a single-threaded scheduler; nothing here needs to be Send
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load(cli.orgs);
    tracing::debug!(?config, "loaded configuration");

    let token = match config.token() {
        Ok(t) => t,
        Err(e) => fail(e),
    };
    let client = match GitHubClient::new(token, &config.api_base) {
        Ok(c) => c,
        Err(e) => fail(e),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app::run(&client, &config, &mut stdout, &Palette::for_stdout()).await {
        fail(e);
    }
}
