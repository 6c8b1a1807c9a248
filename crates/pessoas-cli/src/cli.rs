use crate::commands::Commands;

use pessoas_core::SchemaVersion;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pessoas")]
#[command(about = "Person registry client: merged v1/v2 person records")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides config.toml and PESSOAS_API_URL)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Default schema for single-record commands: v1 or v2
    #[arg(long, global = true)]
    pub(crate) api_version: Option<SchemaVersion>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
