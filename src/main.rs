use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use reply_composer::config::{Config, ConfigOverrides};
use reply_composer::logging::init_tracing;
use reply_composer::reply::{ReplyClient, Tone};
use reply_composer::ui::compose::ComposeSession;

#[derive(Parser, Debug)]
#[command(name = "reply-composer")]
#[command(about = "Generate email replies in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the reply generation service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Tone selected when the form opens
    #[arg(long, value_enum)]
    tone: Option<Tone>,

    /// Total request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout_seconds: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = resolve_config(cli)?;
    tracing::info!(
        base_url = %config.service.base_url,
        tone = %config.defaults.tone,
        "Configuration loaded"
    );

    let client = ReplyClient::new(&config.service).context("Failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let session = ComposeSession::new(client, config.defaults.tone);
    reply_composer::ui::run(session, runtime.handle().clone())?;
    Ok(())
}

fn resolve_config(cli: Cli) -> anyhow::Result<Config> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    config.apply_overrides(ConfigOverrides {
        base_url: cli.base_url,
        tone: cli.tone,
        timeout_seconds: cli.timeout_seconds,
    });
    config.validate()?;
    Ok(config)
}
