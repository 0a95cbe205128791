//! roster - user roster form
//!
//! # Examples
//!
//! ```bash
//! # Add a user and print the stored users
//! roster add "Alice"
//!
//! # Print every stored user
//! roster list --pretty
//!
//! # Delete every stored user
//! roster drop
//!
//! # Interactive form
//! roster shell
//! ```

use roster_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match roster_cli::runner::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
