use anyhow::Context;
use clap::Parser;
use vscodethemes::commands::{self, Cli};
use vscodethemes::config::{self, ConfigLoadResult};
use vscodethemes::{AppError, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match config::get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            return Err(AppError::Config(e.clone()).into());
        }
    };

    logger::setup_logger(config.logging()).context("Failed to initialize logger")?;

    let output = commands::run(cli.command, config).await.map_err(|e| {
        log::error!("{e}");
        e
    })?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render output")?
    );
    Ok(())
}
