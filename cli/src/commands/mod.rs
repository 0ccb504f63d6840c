//! Subcommands of the `vscodethemes` binary.
//!
//! Every command returns a JSON value; `main` prints it to stdout.

pub mod colors;
pub mod kv;
pub mod marketplace;
pub mod query;

use crate::config::AppConfig;
use crate::error::AppResult;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vscodethemes",
    version,
    about = "Derive theme colors, encode color queries and query the VS Code Marketplace"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive the UI colors of a theme page from one base color
    Derive {
        /// Base color (hex, rgb(), hsl() or a CSS name)
        color: String,
        /// Derive for a light theme instead of a dark one
        #[arg(long)]
        light: bool,
    },
    /// Print the CIE L*a*b* components of a color
    Lab { color: String },
    /// Encode and decode `type|color` queries
    #[command(subcommand)]
    Query(QueryCommand),
    /// Query the Visual Studio Marketplace
    #[command(subcommand)]
    Marketplace(MarketplaceCommand),
    /// Build per-language KV records from rendered themes
    Kv {
        /// JSON file holding one extension
        #[arg(long)]
        extension: PathBuf,
        /// JSON file holding an array of rendered themes
        #[arg(long)]
        themes: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Parse one `type|color` query
    Parse { text: String },
    /// Pick the next free slot given the queries already filled
    Next { queries: Vec<String> },
}

#[derive(Debug, Subcommand)]
pub enum MarketplaceCommand {
    /// Recently updated theme extensions
    Updated {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Defaults to `[marketplace] page_size`
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Look an extension up by id
    Id { id: String },
    /// Look an extension up by `publisher.extension`
    Slug { slug: String },
}

/// Run `command` and return its JSON output.
pub async fn run(command: Command, config: &AppConfig) -> AppResult<Value> {
    let output = match command {
        Command::Derive { color, light } => serde_json::to_value(colors::derive(&color, light)?)?,
        Command::Lab { color } => serde_json::to_value(colors::lab(&color)?)?,
        Command::Query(QueryCommand::Parse { text }) => serde_json::to_value(query::parse(&text)?)?,
        Command::Query(QueryCommand::Next { queries }) => {
            serde_json::to_value(query::next(&queries)?)?
        }
        Command::Marketplace(command) => {
            let extensions = marketplace::run(command, config.marketplace()).await?;
            serde_json::to_value(extensions)?
        }
        Command::Kv { extension, themes } => serde_json::to_value(kv::run(&extension, &themes)?)?,
    };
    Ok(output)
}
