use alfred_youtube_search::{Config, SearchKind, SearchPipeline, YouTubeClient};
use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Search YouTube and print the results as Alfred script filter JSON.
///
/// Reads YOUTUBE_API_KEY, YOUTUBE_MAX_RESULTS, and YOUTUBE_ORDER from the environment.
#[derive(Parser, Debug)]
#[command(name = "youtube-search", version)]
struct Cli {
    /// What to search for: video, channel, playlist, or live.
    kind: SearchKind,

    /// The search terms.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    // stdout belongs to Alfred
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };
    let query = cli.query.join(" ");

    let config = Config::from_env().context("read workflow configuration")?;
    let client = YouTubeClient::new(&config.api_key, &config.base_url, config.timeout)
        .context("set up YouTube client")?;

    tracing::info!(kind = %cli.kind, query = %query, "searching YouTube");
    SearchPipeline::new(&client, &config)
        .run_to(cli.kind, &query, std::io::stdout().lock())
        .await
        .with_context(|| format!("search YouTube for {} '{query}'", cli.kind))?;

    Ok(())
}
