#![deny(missing_docs)]

//! # O2P CLI
//!
//! Command Line Interface for the OpenAPI -> Postman converter.
//!
//! Supported Commands:
//! - `convert`: Reads an OpenAPI document and writes a Postman collection.

use clap::{Parser, Subcommand};
use o2p_core::AppResult;

mod convert;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI -> Postman converter CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an OpenAPI document into a Postman collection.
    Convert(convert::ConvertArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert(args) => convert::execute(args),
    }
}
