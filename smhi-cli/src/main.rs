//! SMHI CLI - Command line tool for inspecting temperature chart data.

use clap::Parser;
use smhi_api::{ClientConfig, DEFAULT_API_URL};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "smhi-cli",
    version,
    about = "Swedish city temperature data toolkit"
)]
struct Cli {
    /// Base URL of the temperature API
    #[arg(long, env = "SMHI_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: smhi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config =
        ClientConfig::new(&cli.api_url)?.with_timeout(Duration::from_secs(cli.timeout_secs));
    smhi_cmd::run(cli.command, config).await
}
