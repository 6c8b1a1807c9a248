//! pessoas - person registry CLI
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session is kept in .pessoas/session.json)
//! pessoas login --username ana --password secret1
//!
//! # Merged v1 + v2 list, filtered
//! pessoas person list --search souza --pretty
//!
//! # Edit a v1 record and give it an address (moves it to v2)
//! pessoas person edit 4 --schema v1 --with-address --rua "Rua A" --numero 1 \
//!     --cidade Recife --estado PE --cep 50000-000
//! ```

use pessoas_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    pessoas_cli::run(cli).await
}
